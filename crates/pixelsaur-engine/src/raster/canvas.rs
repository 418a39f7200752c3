use anyhow::Result;
use image::RgbImage;

use crate::coords::Rect;
use crate::paint::Rgb;
use crate::scene::shapes::outline::outline_bands;
use crate::scene::{DrawCmd, DrawList};

/// Mutable RGB raster with a fixed snapping grid.
///
/// Every primitive first aligns its bounding box with [`Rect::snapped`], so
/// all shape edges fall on multiples of `grid`.
pub struct Canvas {
    pixels: RgbImage,
    grid: i32,
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    pub fn new(width: u32, height: u32, grid: u32, background: Rgb) -> Result<Self> {
        anyhow::ensure!(width > 0 && height > 0, "canvas has zero size ({width}x{height})");
        anyhow::ensure!(grid > 0, "grid size must be positive");
        anyhow::ensure!(
            width <= i32::MAX as u32 && height <= i32::MAX as u32 && grid <= i32::MAX as u32,
            "canvas dimensions exceed the signed coordinate range"
        );
        let grid = grid as i32;

        Ok(Self {
            pixels: RgbImage::from_pixel(width, height, background.to_pixel()),
            grid,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[inline]
    pub fn grid(&self) -> i32 {
        self.grid
    }

    /// Reads back one pixel. Returns `None` outside the canvas.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.pixels.get_pixel_checked(x, y).map(|&p| p.into())
    }

    #[inline]
    pub fn image(&self) -> &RgbImage {
        &self.pixels
    }

    /// Hands the finished raster over, consuming the canvas.
    #[inline]
    pub fn into_image(self) -> RgbImage {
        self.pixels
    }

    // ── primitives ────────────────────────────────────────────────────────

    /// Fills the snapped rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let Some(area) = self.clip(rect.snapped(self.grid)) else {
            return;
        };
        let px = color.to_pixel();

        for y in area.origin.y..area.max().y {
            for x in area.origin.x..area.max().x {
                self.pixels.put_pixel(x as u32, y as u32, px);
            }
        }
    }

    /// Fills the ellipse inscribed in the snapped rectangle.
    ///
    /// A pixel is inside when its center satisfies
    /// `((x - cx) / rx)^2 + ((y - cy) / ry)^2 <= 1`.
    pub fn fill_ellipse(&mut self, rect: Rect, color: Rgb) {
        let bounds = rect.snapped(self.grid);
        if bounds.is_empty() {
            return;
        }
        let Some(area) = self.clip(bounds) else {
            return;
        };

        let rx = f64::from(bounds.size.x) / 2.0;
        let ry = f64::from(bounds.size.y) / 2.0;
        let cx = f64::from(bounds.origin.x) + rx;
        let cy = f64::from(bounds.origin.y) + ry;
        let px = color.to_pixel();

        for y in area.origin.y..area.max().y {
            let dy = (f64::from(y) + 0.5 - cy) / ry;
            for x in area.origin.x..area.max().x {
                let dx = (f64::from(x) + 0.5 - cx) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    self.pixels.put_pixel(x as u32, y as u32, px);
                }
            }
        }
    }

    /// Paints a rectangular outline of `thickness` inside `rect` as four
    /// filled bands.
    pub fn stroke_rect(&mut self, rect: Rect, color: Rgb, thickness: i32) {
        for band in outline_bands(rect, thickness) {
            self.fill_rect(band, color);
        }
    }

    /// [`stroke_rect`](Self::stroke_rect) one grid cell thick.
    #[inline]
    pub fn stroke_rect_default(&mut self, rect: Rect, color: Rgb) {
        self.stroke_rect(rect, color, self.grid);
    }

    // ── draw stream ───────────────────────────────────────────────────────

    #[inline]
    pub fn draw(&mut self, cmd: &DrawCmd) {
        match cmd {
            DrawCmd::Rect(c) => self.fill_rect(c.rect, c.color),
            DrawCmd::Ellipse(c) => self.fill_ellipse(c.rect, c.color),
        }
    }

    /// Paints every command of `list` back-to-front.
    pub fn render(&mut self, list: &DrawList) {
        for cmd in list.items() {
            self.draw(cmd);
        }
        log::debug!(
            "rasterized {} commands onto {}x{} canvas (grid {})",
            list.len(),
            self.width(),
            self.height(),
            self.grid
        );
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn clip(&self, rect: Rect) -> Option<Rect> {
        // Dimensions were checked to fit i32 in `new`.
        let full = Rect::new(0, 0, self.width() as i32, self.height() as i32);
        full.intersect(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn white(width: u32, height: u32, grid: u32) -> Canvas {
        Canvas::new(width, height, grid, Rgb::white()).unwrap()
    }

    /// Bounding box of every pixel that is not white.
    fn painted_bounds(canvas: &Canvas) -> Option<Rect> {
        let mut min = (u32::MAX, u32::MAX);
        let mut max = (0u32, 0u32);
        let mut any = false;
        for (x, y, p) in canvas.image().enumerate_pixels() {
            if Rgb::from(*p) != Rgb::white() {
                any = true;
                min = (min.0.min(x), min.1.min(y));
                max = (max.0.max(x + 1), max.1.max(y + 1));
            }
        }
        any.then(|| {
            Rect::new(min.0 as i32, min.1 as i32, (max.0 - min.0) as i32, (max.1 - min.1) as i32)
        })
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_fills_background() {
        let c = Canvas::new(12, 6, 6, BLUE).unwrap();
        assert!(c.image().pixels().all(|p| Rgb::from(*p) == BLUE));
    }

    #[test]
    fn new_rejects_zero_grid_and_zero_size() {
        assert!(Canvas::new(12, 12, 0, Rgb::white()).is_err());
        assert!(Canvas::new(0, 12, 6, Rgb::white()).is_err());
    }

    // ── fill_rect ─────────────────────────────────────────────────────────

    #[test]
    fn fill_rect_snaps_to_grid() {
        let mut c = white(60, 60, 6);
        c.fill_rect(Rect::new(7, 13, 5, 1), RED);
        // origin (6, 12), extent (6, 6)
        assert_eq!(painted_bounds(&c), Some(Rect::new(6, 12, 6, 6)));
    }

    #[test]
    fn fill_rect_bounds_are_grid_multiples() {
        let grid = 6;
        for (x, y, w, h) in [(1, 2, 3, 4), (13, 29, 17, 9), (0, 0, 6, 6), (35, 5, 1, 22)] {
            let mut c = white(72, 72, grid);
            c.fill_rect(Rect::new(x, y, w, h), RED);
            let b = painted_bounds(&c).unwrap();
            let g = grid as i32;
            assert_eq!(b.origin.x % g, 0);
            assert_eq!(b.origin.y % g, 0);
            assert_eq!(b.size.x % g, 0);
            assert_eq!(b.size.y % g, 0);
        }
    }

    #[test]
    fn fill_rect_outside_canvas_is_noop() {
        let mut c = white(30, 30, 6);
        let before = c.image().clone();
        c.fill_rect(Rect::new(100, 100, 20, 20), RED);
        c.fill_rect(Rect::new(-50, 0, 20, 20), RED);
        assert_eq!(c.image(), &before);
    }

    #[test]
    fn shapes_near_i32_limits_are_noops() {
        let mut c = white(30, 30, 6);
        let before = c.image().clone();
        c.fill_rect(Rect::new(i32::MAX - 3, 0, 12, 12), RED);
        c.fill_rect(Rect::new(0, i32::MAX - 1, i32::MAX, i32::MAX), RED);
        c.fill_rect(Rect::new(i32::MIN, i32::MIN, 12, 12), RED);
        c.fill_ellipse(Rect::new(i32::MAX - 3, i32::MAX - 3, 12, 12), RED);
        c.stroke_rect_default(Rect::new(i32::MAX - 20, 0, 40, 40), RED);
        assert_eq!(c.image(), &before);
    }

    #[test]
    fn huge_rect_covering_canvas_fills_it() {
        let mut c = white(30, 30, 6);
        c.fill_rect(Rect::new(-100, -100, i32::MAX, i32::MAX), RED);
        assert!(c.image().pixels().all(|p| Rgb::from(*p) == RED));
    }

    #[test]
    fn fill_rect_partially_outside_is_clipped() {
        let mut c = white(30, 30, 6);
        c.fill_rect(Rect::new(-6, 24, 12, 30), RED);
        assert_eq!(painted_bounds(&c), Some(Rect::new(0, 24, 6, 6)));
    }

    #[test]
    fn later_rect_occludes_earlier() {
        let mut c = white(36, 36, 6);
        c.fill_rect(Rect::new(0, 0, 24, 24), RED);
        c.fill_rect(Rect::new(12, 12, 24, 24), BLUE);

        assert_eq!(c.pixel(6, 6), Some(RED));
        assert_eq!(c.pixel(18, 18), Some(BLUE));
        assert_eq!(c.pixel(30, 30), Some(BLUE));
        assert_eq!(c.pixel(30, 0), Some(Rgb::white()));
    }

    // ── fill_ellipse ──────────────────────────────────────────────────────

    #[test]
    fn fill_ellipse_circle_in_12px_box() {
        let mut c = white(24, 24, 6);
        c.fill_ellipse(Rect::new(0, 0, 12, 12), RED);

        assert_eq!(painted_bounds(&c), Some(Rect::new(0, 0, 12, 12)));
        // Center and edge midpoints are inside.
        assert_eq!(c.pixel(6, 6), Some(RED));
        assert_eq!(c.pixel(0, 6), Some(RED));
        assert_eq!(c.pixel(6, 0), Some(RED));
        assert_eq!(c.pixel(11, 6), Some(RED));
        // Corners of the box are outside.
        for (x, y) in [(0, 0), (11, 0), (0, 11), (11, 11), (1, 1), (10, 10)] {
            assert_eq!(c.pixel(x, y), Some(Rgb::white()), "corner ({x}, {y})");
        }
    }

    #[test]
    fn fill_ellipse_snaps_box() {
        let mut c = white(60, 60, 6);
        c.fill_ellipse(Rect::new(8, 8, 20, 10), RED);
        // Snapped box is (6, 6, 24, 12); the ellipse touches all four sides.
        assert_eq!(painted_bounds(&c), Some(Rect::new(6, 6, 24, 12)));
    }

    #[test]
    fn fill_ellipse_empty_box_is_noop() {
        let mut c = white(12, 12, 6);
        c.fill_ellipse(Rect::new(0, 0, 0, 12), RED);
        assert_eq!(painted_bounds(&c), None);
    }

    #[test]
    fn fill_ellipse_clipped_at_edge() {
        let mut c = white(12, 12, 6);
        c.fill_ellipse(Rect::new(-6, -6, 12, 12), RED);
        assert_eq!(c.pixel(0, 0), Some(RED));
        assert_eq!(c.pixel(11, 11), Some(Rgb::white()));
    }

    // ── stroke_rect ───────────────────────────────────────────────────────

    #[test]
    fn stroke_rect_leaves_interior() {
        let mut c = white(36, 36, 6);
        c.stroke_rect_default(Rect::new(6, 6, 24, 24), RED);

        assert_eq!(painted_bounds(&c), Some(Rect::new(6, 6, 24, 24)));
        assert_eq!(c.pixel(6, 6), Some(RED));
        assert_eq!(c.pixel(29, 29), Some(RED));
        assert_eq!(c.pixel(17, 6), Some(RED));
        assert_eq!(c.pixel(6, 17), Some(RED));
        assert_eq!(c.pixel(17, 17), Some(Rgb::white()));
        assert_eq!(c.pixel(12, 12), Some(Rgb::white()));
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn render_follows_insertion_order() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(0, 0, 12, 12), BLUE);
        list.push_ellipse(Rect::new(0, 0, 12, 12), RED);

        let mut c = white(12, 12, 6);
        c.render(&list);
        assert_eq!(c.pixel(0, 0), Some(BLUE));
        assert_eq!(c.pixel(6, 6), Some(RED));
    }
}
