use std::path::PathBuf;

use anyhow::Result;

use crate::paint::Rgb;

/// Output parameters for one rendered picture.
///
/// Keep this structure small. The picture is fixed content; these values only
/// describe the raster it is painted on and where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Canvas width in pixels. Must be a multiple of `grid`.
    pub width: u32,

    /// Canvas height in pixels. Must be a multiple of `grid`.
    pub height: u32,

    /// Side of the square pixel-art cell, in canvas pixels.
    ///
    /// Shapes snap to this grid and pixelation flattens each cell to one color.
    pub grid: u32,

    /// JPEG quality factor, `1..=100`.
    pub jpeg_quality: u8,

    /// Destination file. Its parent directory must already exist.
    pub output_path: PathBuf,

    /// Canvas fill; scene content also paints it as its first shape.
    pub background: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 600,
            grid: 6,
            jpeg_quality: 95,
            output_path: PathBuf::from("static/assets/img/background.jpeg"),
            background: Rgb::white(),
        }
    }
}

impl RenderConfig {
    /// Checks the invariants the pixelation pass relies on.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.grid > 0, "grid size must be positive");
        anyhow::ensure!(
            self.width > 0 && self.height > 0,
            "canvas has zero size ({}x{})",
            self.width,
            self.height
        );
        anyhow::ensure!(
            self.width % self.grid == 0 && self.height % self.grid == 0,
            "canvas {}x{} is not a whole number of {}px cells",
            self.width,
            self.height,
            self.grid
        );
        anyhow::ensure!(
            (1..=100).contains(&self.jpeg_quality),
            "jpeg quality {} outside 1..=100",
            self.jpeg_quality
        );
        Ok(())
    }
}
