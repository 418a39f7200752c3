//! Software rasterizer.
//!
//! `Canvas` owns the pixel buffer and implements the three grid-snapping
//! primitives (filled rectangle, filled ellipse, rectangular outline).
//! Painting is clipped to the canvas and never fails.

mod canvas;

pub use canvas::Canvas;
