//! Salience scoring
//!
//! A single "interestingness" number per distinct color, used only to order
//! colors before the merge loop. Desaturated colors score by darkness times
//! relative frequency; saturated colors score by
//! `saturation * luminosity * count`, which uses the *absolute* count and so
//! lets a vivid minority outrank a dull majority.

use crate::color::{LinearRgb, Rgb};

/// Saturation at or above which the vivid branch of the score applies.
const SATURATION_SPLIT: f64 = 0.5;

/// HSL-style saturation of linear components.
///
/// `0` for neutral colors; `diff / (2 - diff)` above mid lightness,
/// `diff / sum` otherwise.
pub fn saturation(linear: LinearRgb) -> f64 {
    let max = linear.max();
    let min = linear.min();
    let diff = max - min;
    let sum = max + min;

    if diff == 0.0 {
        0.0
    } else if sum / 2.0 > 0.5 {
        diff / (2.0 - diff)
    } else {
        diff / sum
    }
}

/// Midpoint lightness blended with relative luminance.
pub fn luminosity(linear: LinearRgb) -> f64 {
    let midpoint = (linear.max() + linear.min()) / 2.0;
    (midpoint + linear.relative_luminance()) / 2.0
}

/// Salience of `rgb` seen on `count` pixels, in a histogram holding
/// `distinct_colors` distinct colors.
///
/// # Example
///
/// ```
/// use palette_extract::{salience, Rgb};
///
/// // In an image with 1000 distinct colors, a vivid red on 100 pixels
/// // outranks a light gray on 5000
/// let red = salience(Rgb::new(255, 0, 0), 100, 1000);
/// let gray = salience(Rgb::new(200, 200, 200), 5000, 1000);
/// assert!(red > gray);
/// ```
pub fn salience(rgb: Rgb, count: u64, distinct_colors: usize) -> f64 {
    let linear = LinearRgb::from(rgb);
    let saturation = saturation(linear);
    let luminosity = luminosity(linear);

    if saturation < SATURATION_SPLIT {
        (1.0 - luminosity) * count as f64 / distinct_colors as f64
    } else {
        count as f64 * saturation * luminosity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_has_zero_saturation() {
        for v in [0u8, 1, 64, 128, 255] {
            assert_eq!(saturation(LinearRgb::from(Rgb::new(v, v, v))), 0.0);
        }
    }

    #[test]
    fn test_saturation_branches() {
        // Dark branch: sum / 2 <= 0.5 -> diff / sum
        let dark = LinearRgb::new(0.4, 0.1, 0.1);
        assert!((saturation(dark) - 0.3 / 0.5).abs() < 1e-12);

        // Light branch: sum / 2 > 0.5 -> diff / (2 - diff)
        let light = LinearRgb::new(1.0, 0.5, 0.5);
        assert!((saturation(light) - 0.5 / 1.5).abs() < 1e-12);

        // Pure primary is fully saturated
        assert!((saturation(LinearRgb::new(1.0, 0.0, 0.0)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_luminosity_of_extremes() {
        assert_eq!(luminosity(LinearRgb::new(0.0, 0.0, 0.0)), 0.0);
        assert!((luminosity(LinearRgb::new(1.0, 1.0, 1.0)) - 1.0).abs() < 1e-12);
        // Pure red: midpoint 0.5, luminance 0.2126
        assert!((luminosity(LinearRgb::new(1.0, 0.0, 0.0)) - (0.5 + 0.2126) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_desaturated_score_uses_relative_frequency() {
        let black_1 = salience(Rgb::new(0, 0, 0), 1, 4);
        assert!((black_1 - 0.25).abs() < 1e-12);
        let black_8 = salience(Rgb::new(0, 0, 0), 8, 4);
        assert!((black_8 - 2.0).abs() < 1e-12);
        // White contributes nothing on the desaturated branch
        assert!(salience(Rgb::new(255, 255, 255), 1000, 1).abs() < 1e-12);
    }

    #[test]
    fn test_saturated_score_uses_absolute_count() {
        let lum = (0.5 + 0.2126) / 2.0;
        let red = salience(Rgb::new(255, 0, 0), 3, 100);
        assert!((red - 3.0 * 1.0 * lum).abs() < 1e-12);
        // Distinct color count does not matter on this branch
        assert_eq!(red, salience(Rgb::new(255, 0, 0), 3, 2));
    }

    #[test]
    fn test_score_scales_with_count() {
        let one = salience(Rgb::new(0, 0, 255), 1, 5);
        let ten = salience(Rgb::new(0, 0, 255), 10, 5);
        assert!((ten - 10.0 * one).abs() < 1e-9);
    }
}
