use crate::coords::Rect;
use crate::paint::Rgb;
use crate::scene::{DrawCmd, DrawList};

/// Filled rectangle payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Rgb,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, color: Rgb) -> Self {
        Self { rect, color }
    }
}

impl DrawList {
    /// Records a solid rectangle.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, color: Rgb) {
        self.push(DrawCmd::Rect(RectCmd::new(rect, color)));
    }
}
