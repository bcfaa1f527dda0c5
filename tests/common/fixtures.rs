//! Test fixtures: small images written to a temporary directory.

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};
use tempfile::TempDir;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];
pub const WHITE: [u8; 4] = [255, 255, 255, 255];
pub const CLEAR: [u8; 4] = [0, 255, 0, 0];

/// A temporary directory holding generated images.
///
/// The directory is removed when the value is dropped.
pub struct TestImages {
    dir: TempDir,
}

impl TestImages {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an image built pixel by pixel.
    pub fn write(
        &self,
        name: &str,
        width: u32,
        height: u32,
        format: ImageFormat,
        f: impl Fn(u32, u32) -> [u8; 4],
    ) -> PathBuf {
        let img = RgbaImage::from_fn(width, height, |x, y| Rgba(f(x, y)));
        let path = self.dir.path().join(name);
        match format {
            // JPEG has no alpha channel
            ImageFormat::Jpeg => image::DynamicImage::ImageRgba8(img)
                .to_rgb8()
                .save_with_format(&path, format),
            _ => img.save_with_format(&path, format),
        }
        .expect("Failed to write test image");
        path
    }

    /// 2x2 PNG with three red pixels and one blue.
    pub fn red_blue_png(&self) -> PathBuf {
        self.write("red_blue.png", 2, 2, ImageFormat::Png, |x, y| {
            if (x, y) == (1, 1) {
                BLUE
            } else {
                RED
            }
        })
    }

    /// 1x2 PNG: one transparent pixel above one red pixel.
    pub fn half_transparent_png(&self) -> PathBuf {
        self.write("half.png", 1, 2, ImageFormat::Png, |_, y| {
            if y == 0 {
                CLEAR
            } else {
                RED
            }
        })
    }

    /// Fully transparent PNG.
    pub fn transparent_png(&self) -> PathBuf {
        self.write("clear.png", 3, 3, ImageFormat::Png, |_, _| CLEAR)
    }

    /// Ten near-duplicate colors forming a red group and a blue group.
    pub fn two_cluster_png(&self) -> PathBuf {
        let mut pixels = Vec::new();
        for k in 0..5u8 {
            for _ in 0..=k {
                pixels.push([255 - 4 * k, 0, 0, 255]);
            }
            for _ in 0..=(2 * k) {
                pixels.push([0, 0, 255 - 4 * k, 255]);
            }
        }
        let width = pixels.len() as u32;
        self.write("clusters.png", width, 1, ImageFormat::Png, move |x, _| {
            pixels[x as usize]
        })
    }

    /// Horizontal stripes of six distinct hues.
    pub fn stripes_png(&self) -> PathBuf {
        const HUES: [[u8; 4]; 6] = [
            [230, 25, 75, 255],
            [60, 180, 75, 255],
            [255, 225, 25, 255],
            [0, 130, 200, 255],
            [245, 130, 48, 255],
            [145, 30, 180, 255],
        ];
        self.write("stripes.png", 6, 12, ImageFormat::Png, |_, y| {
            HUES[(y / 2) as usize]
        })
    }

    /// Write a file that is not an image.
    pub fn write_garbage(&self, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, b"not an image at all").expect("Failed to write file");
        path
    }

    /// Write a config file.
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.dir.path().join("colorsift.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }
}

impl Default for TestImages {
    fn default() -> Self {
        Self::new()
    }
}
