use super::Point;

/// Axis-aligned rectangle in canvas pixels (top-left origin).
///
/// Covers the half-open area `[x, x + w) x [y, y + h)`.
///
/// Derived edges saturate at the `i32` limits instead of overflowing, so
/// boxes far outside any canvas stay well-defined and simply clip away.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub origin: Point,
    pub size: Point,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Point::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Point) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Point {
        Point::new(
            self.origin.x.saturating_add(self.size.x),
            self.origin.y.saturating_add(self.size.y),
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// Moves the rectangle by `by`, keeping its size.
    #[inline]
    pub fn translated(self, by: Point) -> Self {
        Self::new(
            self.origin.x.saturating_add(by.x),
            self.origin.y.saturating_add(by.y),
            self.size.x,
            self.size.y,
        )
    }

    /// Grows the rectangle by `by` pixels on every side.
    #[inline]
    pub fn inflated(self, by: i32) -> Self {
        let grow = by.saturating_mul(2);
        Self::new(
            self.origin.x.saturating_sub(by),
            self.origin.y.saturating_sub(by),
            self.size.x.saturating_add(grow),
            self.size.y.saturating_add(grow),
        )
    }

    /// Aligns the rectangle to a square grid of side `grid`.
    ///
    /// The origin is floored and the extent ceiled to multiples of `grid`,
    /// so the result always starts on a grid line and spans whole cells.
    /// Extents are snapped independently of the origin; a box that straddles
    /// a grid line does not gain an extra cell.
    #[inline]
    pub fn snapped(self, grid: i32) -> Self {
        debug_assert!(grid > 0, "grid size must be positive");
        let floor = |v: i32| v.div_euclid(grid).saturating_mul(grid);
        let ceil = |v: i32| v.saturating_add(grid - 1).div_euclid(grid) * grid;

        Self::new(
            floor(self.origin.x),
            floor(self.origin.y),
            ceil(self.size.x),
            ceil(self.size.y),
        )
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let (a_max, b_max) = (self.max(), other.max());
        let x0 = self.origin.x.max(other.origin.x);
        let y0 = self.origin.y.max(other.origin.y);
        let x1 = a_max.x.min(b_max.x);
        let y1 = a_max.y.min(b_max.y);

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0)))
        }
    }
}
