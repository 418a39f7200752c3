//! Pixelation and file output.
//!
//! The stages after rasterization: flatten each grid cell to one color, then
//! encode the raster as JPEG.

mod jpeg;
mod pixelate;

pub use jpeg::{encode_jpeg, save_jpeg};
pub use pixelate::pixelate;

use anyhow::Result;
use image::RgbImage;

use crate::config::RenderConfig;
use crate::raster::Canvas;
use crate::scene::DrawList;

/// Paints `list` onto a fresh canvas and pixelates the result.
pub fn render(list: &DrawList, config: &RenderConfig) -> Result<RgbImage> {
    config.validate()?;

    let mut canvas = Canvas::new(config.width, config.height, config.grid, config.background)?;
    canvas.render(list);

    Ok(pixelate(&canvas.into_image(), config.grid))
}
