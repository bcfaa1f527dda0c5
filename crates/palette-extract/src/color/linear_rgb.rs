//! Linear RGB color type
//!
//! Gamma-decoded RGB. The salience scorer and the XYZ matrix both work on
//! these components, never on the encoded bytes.

use super::lut::srgb_to_linear;
use super::rgb::Rgb;

/// A color in linear RGB, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Largest component.
    #[inline]
    pub fn max(self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest component.
    #[inline]
    pub fn min(self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    /// Rec. 709 relative luminance `0.2126 r + 0.7152 g + 0.0722 b`.
    #[inline]
    pub fn relative_luminance(self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

impl From<Rgb> for LinearRgb {
    /// Gamma decode each channel through the build-time lookup table.
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb_to_linear(rgb.r),
            g: srgb_to_linear(rgb.g),
            b: srgb_to_linear(rgb.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes() {
        let black = LinearRgb::from(Rgb::new(0, 0, 0));
        assert_eq!(black, LinearRgb::new(0.0, 0.0, 0.0));

        let white = LinearRgb::from(Rgb::new(255, 255, 255));
        assert!((white.r - 1.0).abs() < 1e-12);
        assert!((white.relative_luminance() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mid_gray() {
        // ((128/255 + 0.055) / 1.055)^2.4 = 0.21586...
        let gray = LinearRgb::from(Rgb::new(128, 128, 128));
        assert!((gray.r - 0.21586).abs() < 1e-4, "got {}", gray.r);
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
    }

    #[test]
    fn test_min_max() {
        let c = LinearRgb::new(0.2, 0.9, 0.5);
        assert_eq!(c.max(), 0.9);
        assert_eq!(c.min(), 0.2);
    }
}
