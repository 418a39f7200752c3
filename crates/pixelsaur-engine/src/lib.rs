//! Pixelsaur engine crate.
//!
//! Owns the pieces every picture goes through: integer geometry, opaque
//! colors, the ordered draw list, the grid-snapping software canvas, and the
//! pixelation / JPEG output stage.

pub mod config;
pub mod coords;
pub mod logging;
pub mod output;
pub mod paint;
pub mod raster;
pub mod scene;

pub use config::RenderConfig;
