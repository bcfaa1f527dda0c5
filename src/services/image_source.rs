//! Image decoding into a [`PixelSource`]
//!
//! PNG, JPEG, GIF (first frame) and BMP are accepted. Everything is
//! converted to RGBA8, so sources always use the 8-bit opacity scale.

use std::path::Path;

use image::{ImageFormat, RgbaImage};
use palette_extract::{AlphaScale, PixelSource, Rgba};

use crate::error::ImageError;

/// Formats the loader accepts.
const SUPPORTED: [ImageFormat; 4] = [
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Gif,
    ImageFormat::Bmp,
];

/// A decoded RGBA8 image.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pixels: RgbaImage,
    format: ImageFormat,
}

impl DecodedImage {
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl PixelSource for DecodedImage {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn pixel_at(&self, x: u32, y: u32) -> Rgba {
        let [r, g, b, a] = self.pixels.get_pixel(x, y).0;
        Rgba::new(r, g, b, a)
    }

    fn alpha_scale(&self) -> AlphaScale {
        AlphaScale::RGBA8
    }
}

/// Read and decode an image file.
///
/// The format is detected from the file content; the extension is only
/// consulted when the content is not recognized.
pub fn load_image(path: &Path) -> Result<DecodedImage, ImageError> {
    let bytes = std::fs::read(path).map_err(|source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let format = match image::guess_format(&bytes) {
        Ok(format) => format,
        Err(_) => ImageFormat::from_path(path)
            .map_err(|_| ImageError::UnsupportedFormat(describe(path)))?,
    };

    let image = decode_with_format(&bytes, format)?;
    tracing::debug!(
        path = %path.display(),
        format = ?image.format,
        width = image.width(),
        height = image.height(),
        "Loaded image"
    );
    Ok(image)
}

/// Decode an in-memory image, detecting its format from the content.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, ImageError> {
    let format = image::guess_format(bytes)
        .map_err(|_| ImageError::UnsupportedFormat("unrecognized content".to_string()))?;
    decode_with_format(bytes, format)
}

fn decode_with_format(bytes: &[u8], format: ImageFormat) -> Result<DecodedImage, ImageError> {
    if !SUPPORTED.contains(&format) {
        return Err(ImageError::UnsupportedFormat(format!("{format:?}")));
    }

    let decoded = image::load_from_memory_with_format(bytes, format)?;
    Ok(DecodedImage {
        pixels: decoded.to_rgba8(),
        format,
    })
}

fn describe(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| path.display().to_string())
}
