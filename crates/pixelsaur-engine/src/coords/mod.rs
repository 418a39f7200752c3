//! Integer geometry shared by the draw list and the raster canvas.
//!
//! Canonical space:
//! - canvas pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! Coordinates are signed so that shapes may start left of / above the
//! canvas; painting clips them.

mod point;
mod rect;

pub use point::Point;
pub use rect::Rect;
