//! CIE L\*a\*b\* color space
//!
//! The perceptual space the merge loop measures distances in. Conversion
//! is `Rgb -> LinearRgb -> Xyz -> Lab`; each step is its own `From` impl so
//! callers can stop anywhere along the chain.

use super::ciede2000::ciede2000;
use super::linear_rgb::LinearRgb;
use super::rgb::Rgb;
use super::xyz::Xyz;

/// `(6/29)^3`, below which the cube root is replaced by a linear segment.
const EPSILON: f64 = (6.0 / 29.0) * (6.0 / 29.0) * (6.0 / 29.0);

/// A color in CIE L\*a\*b\*.
///
/// - `l`: lightness, `0.0` (black) to `100.0` (white)
/// - `a`: green (negative) to red (positive)
/// - `b`: blue (negative) to yellow (positive)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma `sqrt(a^2 + b^2)`.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// CIEDE2000 color difference to `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_extract::{Lab, Rgb};
    ///
    /// let red = Lab::from(Rgb::new(255, 0, 0));
    /// let dark_red = Lab::from(Rgb::new(250, 0, 0));
    /// assert!(red.delta_e(dark_red) < 2.0);
    /// assert_eq!(red.delta_e(red), 0.0);
    /// ```
    #[inline]
    pub fn delta_e(self, other: Lab) -> f64 {
        ciede2000(self, other)
    }
}

/// CIE step function applied to each white-relative tristimulus value.
#[inline]
fn lab_step(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (1.0 / 3.0) * (29.0 / 6.0) * (29.0 / 6.0) * t + 4.0 / 29.0
    }
}

/// X and Z are divided by [`Xyz::WHITE`], the row sums of the rounded
/// matrix, before the step function, so that neutral grays land on
/// `a = b = 0`. Applying the step to bare X and Z instead would tint grays
/// slightly and shift every CIEDE2000 distance (and thus which colors merge)
/// by a small amount.
impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = lab_step(xyz.x / Xyz::WHITE.x);
        let fy = lab_step(xyz.y / Xyz::WHITE.y);
        let fz = lab_step(xyz.z / Xyz::WHITE.z);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<LinearRgb> for Lab {
    fn from(rgb: LinearRgb) -> Self {
        Lab::from(Xyz::from(rgb))
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        Lab::from(LinearRgb::from(rgb))
    }
}
