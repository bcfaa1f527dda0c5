//! CIEDE2000 color difference
//!
//! Follows G. Sharma, W. Wu, E. N. Dalal, "The CIEDE2000 Color-Difference
//! Formula: Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations" (2005), with the parametric factors `kL = kC = kH = 1`.
//! Hue angles are in degrees throughout; trigonometric calls convert at the
//! point of use.
//!
//! The merge threshold `100 / (paletteSize + 1)` is calibrated against this
//! exact formula, so do not swap it for a cheaper approximation.

use super::lab::Lab;

/// `25^7`
const POW25_7: f64 = 6_103_515_625.0;

/// Hue angle of `(a', b)` in degrees, `[0, 360)`. Achromatic is 0.
#[inline]
fn hue_degrees(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// CIEDE2000 difference between two L\*a\*b\* colors. Always `>= 0`.
///
/// Symmetric in its arguments and exactly zero for identical inputs
/// (including achromatic ones, where every hue term is short-circuited).
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    let Lab { l: l1, a: a1, b: b1 } = lab1;
    let Lab { l: l2, a: a2, b: b2 } = lab2;

    // Chroma and the a-axis rescale factor G
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_bar = (c1 + c2) / 2.0;
    let c_bar7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let a1p = (1.0 + g) * a1;
    let a2p = (1.0 + g) * a2;

    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);

    let h1p = hue_degrees(a1p, b1);
    let h2p = hue_degrees(a2p, b2);

    // Differences
    let dl = l2 - l1;
    let dc = c2p - c1p;
    let chroma_product = c1p * c2p;

    let dh = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2p - h1p;
        if diff.abs() <= 180.0 {
            diff
        } else if diff > 180.0 {
            diff - 360.0
        } else {
            diff + 360.0
        }
    };
    let d_big_h = 2.0 * chroma_product.sqrt() * (dh / 2.0).to_radians().sin();

    // Means
    let l_bar = (l1 + l2) / 2.0;
    let cp_bar = (c1p + c2p) / 2.0;

    let hp_bar = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (hp_bar - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_bar).to_radians().cos()
        + 0.32 * (3.0 * hp_bar + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_bar - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((hp_bar - 275.0) / 25.0).powi(2)).exp();
    let cp_bar7 = cp_bar.powi(7);
    let rc = 2.0 * (cp_bar7 / (cp_bar7 + POW25_7)).sqrt();

    // Weighting functions
    let l_off = (l_bar - 50.0).powi(2);
    let sl = 1.0 + (0.015 * l_off) / (20.0 + l_off).sqrt();
    let sc = 1.0 + 0.045 * cp_bar;
    let sh = 1.0 + 0.015 * cp_bar * t;

    let rt = -(2.0 * delta_theta).to_radians().sin() * rc;

    let l_term = dl / sl;
    let c_term = dc / sc;
    let h_term = d_big_h / sh;

    // Rounding can leave the radicand a hair below zero for near-identical
    // colors; clamp so the result is never NaN.
    (l_term * l_term + c_term * c_term + h_term * h_term + rt * c_term * h_term)
        .max(0.0)
        .sqrt()
}
