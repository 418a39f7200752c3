//! Paint model shared between scene content and the rasterizer.
//!
//! Scope is deliberately narrow: opaque solid colors only. Shapes painted
//! later replace the pixels underneath them; nothing is blended.
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Rgb;
