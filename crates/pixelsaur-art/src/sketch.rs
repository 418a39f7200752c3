use pixelsaur_engine::coords::{Point, Rect};
use pixelsaur_engine::paint::Rgb;
use pixelsaur_engine::scene::DrawList;

/// Authoring surface for scene content.
///
/// Wraps a `DrawList` with an anchor so content tables can be written in
/// coordinates relative to a body part, and with the grid size so outline
/// thickness follows the pixel-art cell.
pub struct Sketch<'a> {
    list: &'a mut DrawList,
    origin: Point,
    grid: i32,
}

impl<'a> Sketch<'a> {
    pub fn new(list: &'a mut DrawList, grid: i32) -> Self {
        Self { list, origin: Point::zero(), grid }
    }

    /// A sketch whose coordinates are relative to `at` (itself relative to
    /// this sketch's anchor). Shapes recorded through it land in the same list.
    pub fn anchored(&mut self, at: Point) -> Sketch<'_> {
        Sketch { list: &mut *self.list, origin: self.origin + at, grid: self.grid }
    }

    #[inline]
    pub fn grid(&self) -> i32 {
        self.grid
    }

    // ── primitives ────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.list.push_rect(rect.translated(self.origin), color);
    }

    pub fn fill_ellipse(&mut self, rect: Rect, color: Rgb) {
        self.list.push_ellipse(rect.translated(self.origin), color);
    }

    /// One-cell-thick rectangular outline inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, color: Rgb) {
        self.list.push_outline(rect.translated(self.origin), color, self.grid);
    }

    // ── outlined shapes ───────────────────────────────────────────────────

    /// The ellipse behind `rect`, one cell larger on every side.
    pub fn ellipse_halo(&mut self, rect: Rect, outline: Rgb) {
        self.fill_ellipse(rect.inflated(self.grid), outline);
    }

    /// Halo then fill: an ellipse with a one-cell outline.
    pub fn outlined_ellipse(&mut self, rect: Rect, fill: Rgb, outline: Rgb) {
        self.ellipse_halo(rect, outline);
        self.fill_ellipse(rect, fill);
    }

    /// Overlapping ellipses drawn as one outlined shape: every halo first,
    /// then every fill, so no outline shows between segments.
    pub fn outlined_chain(&mut self, segments: &[Rect], fill: Rgb, outline: Rgb) {
        for &seg in segments {
            self.ellipse_halo(seg, outline);
        }
        for &seg in segments {
            self.fill_ellipse(seg, fill);
        }
    }
}
