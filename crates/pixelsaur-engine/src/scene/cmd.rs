use crate::coords::Rect;
use crate::paint::Rgb;
use crate::scene::shapes::ellipse::EllipseCmd;
use crate::scene::shapes::rect::RectCmd;

/// Renderer-agnostic shape descriptor.
///
/// Outlines have no variant of their own; they are recorded as four
/// [`DrawCmd::Rect`] bands (see `DrawList::push_outline`).
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `raster::Canvas::draw` to paint it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Ellipse(EllipseCmd),
}

impl DrawCmd {
    /// Unsnapped bounding box as authored.
    #[inline]
    pub fn bounds(&self) -> Rect {
        match self {
            DrawCmd::Rect(c) => c.rect,
            DrawCmd::Ellipse(c) => c.rect,
        }
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        match self {
            DrawCmd::Rect(c) => c.color,
            DrawCmd::Ellipse(c) => c.color,
        }
    }
}
