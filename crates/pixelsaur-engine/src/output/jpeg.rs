use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

/// Encodes `image` as a baseline JPEG at `quality` into memory.
///
/// Output depends only on the pixels and the quality factor.
pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    write_jpeg(image, quality, &mut bytes)?;
    Ok(bytes)
}

/// Writes `image` as JPEG to `path`, replacing any existing file.
///
/// The parent directory is not created; a missing directory is an error.
pub fn save_jpeg(image: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    write_jpeg(image, quality, &mut out)?;
    out.flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    log::info!(
        "wrote {}x{} jpeg (quality {quality}) to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

fn write_jpeg<W: Write>(image: &RgbImage, quality: u8, out: &mut W) -> Result<()> {
    JpegEncoder::new_with_quality(out, quality)
        .encode_image(image)
        .context("failed to encode jpeg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn checker(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            if (x / 6 + y / 6) % 2 == 0 { Rgb([30, 60, 100]) } else { Rgb([255, 255, 255]) }
        })
    }

    #[test]
    fn encode_is_deterministic() {
        let img = checker(96, 48);
        let a = encode_jpeg(&img, 95).unwrap();
        let b = encode_jpeg(&img, 95).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn encode_produces_decodable_jpeg() {
        let bytes = encode_jpeg(&checker(96, 48), 95).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory_with_format(&bytes, image::ImageFormat::Jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (96, 48));
    }

    #[test]
    fn save_overwrites_existing_file() {
        let path = std::env::temp_dir().join(format!("pixelsaur-save-{}.jpeg", std::process::id()));
        std::fs::write(&path, b"stale").unwrap();

        let img = checker(24, 12);
        save_jpeg(&img, &path, 90).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(written, encode_jpeg(&img, 90).unwrap());
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let path = std::env::temp_dir()
            .join(format!("pixelsaur-missing-{}", std::process::id()))
            .join("out.jpeg");
        let err = save_jpeg(&checker(12, 12), &path, 90).unwrap_err();
        assert!(err.to_string().contains("failed to create"));
    }
}
