use crate::coords::Rect;
use crate::paint::Rgb;
use crate::scene::{DrawCmd, DrawList};

/// Filled ellipse payload.
///
/// The ellipse is the one inscribed in `rect` (after grid snapping).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EllipseCmd {
    pub rect: Rect,
    pub color: Rgb,
}

impl EllipseCmd {
    #[inline]
    pub fn new(rect: Rect, color: Rgb) -> Self {
        Self { rect, color }
    }
}

impl DrawList {
    /// Records a solid ellipse inscribed in `rect`.
    #[inline]
    pub fn push_ellipse(&mut self, rect: Rect, color: Rgb) {
        self.push(DrawCmd::Ellipse(EllipseCmd::new(rect, color)));
    }
}
