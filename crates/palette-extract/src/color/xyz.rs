//! CIE XYZ tristimulus values
//!
//! Linear sRGB primaries with a D65 white, four-digit matrix.

use super::linear_rgb::LinearRgb;

/// A color in CIE 1931 XYZ, `y` normalised so white has `Y = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    /// Reference white: the matrix applied to linear white (its row sums).
    pub const WHITE: Xyz = Xyz {
        x: 0.4124 + 0.3576 + 0.1805,
        y: 0.2126 + 0.7152 + 0.0722,
        z: 0.0193 + 0.1192 + 0.9505,
    };

    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<LinearRgb> for Xyz {
    fn from(rgb: LinearRgb) -> Self {
        Self {
            x: 0.4124 * rgb.r + 0.3576 * rgb.g + 0.1805 * rgb.b,
            y: 0.2126 * rgb.r + 0.7152 * rgb.g + 0.0722 * rgb.b,
            z: 0.0193 * rgb.r + 0.1192 * rgb.g + 0.9505 * rgb.b,
        }
    }
}
