//! Gamma lookup table access
//!
//! The table is generated at compile time by build.rs: one exact `f64`
//! entry per 8-bit channel value, so lookups are bit-identical to the
//! closed-form conversion.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Convert an 8-bit sRGB channel to linear light.
///
/// `x = byte / 255`; `x / 12.92` when `x <= 0.03928`, otherwise
/// `((x + 0.055) / 1.055)^2.4`.
#[inline]
pub fn srgb_to_linear(byte: u8) -> f64 {
    SRGB_TO_LINEAR[byte as usize]
}
