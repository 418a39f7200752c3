//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic shape descriptors
//! - preserve paint order (insertion order, back-to-front)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::ellipse::EllipseCmd;
pub use shapes::rect::RectCmd;
