use image::imageops::{self, FilterType};
use image::RgbImage;

/// Flattens every `grid x grid` cell to a single color.
///
/// Shrinks by `grid` with nearest-neighbor sampling, then enlarges back to
/// the original size the same way. Each output cell takes the color of the
/// source pixel at offset `(grid / 2, grid / 2)` in the matching cell; finer
/// detail is discarded.
///
/// Dimensions that are not multiples of `grid` leave a partial last
/// row/column whose cells are not guaranteed to be uniform.
pub fn pixelate(image: &RgbImage, grid: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    if grid <= 1 {
        return image.clone();
    }

    let small_w = (width / grid).max(1);
    let small_h = (height / grid).max(1);

    let small = imageops::resize(image, small_w, small_h, FilterType::Nearest);
    log::debug!("pixelate: {width}x{height} -> {small_w}x{small_h} -> {width}x{height}");
    imageops::resize(&small, width, height, FilterType::Nearest)
}
