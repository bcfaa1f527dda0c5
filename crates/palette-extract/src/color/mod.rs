//! Color types and conversion utilities
//!
//! Every conversion the pipeline needs, as a chain of `From` impls:
//!
//! ```text
//! Rgb (8-bit, gamma encoded)
//!  -> LinearRgb   (gamma decode via build-time LUT)
//!  -> Xyz         (sRGB/D65 matrix)
//!  -> Lab         (CIE step function, white-relative)
//! ```
//!
//! plus the [`ciede2000`] distance between two [`Lab`] values.
//!
//! # Example
//!
//! ```
//! use palette_extract::{ciede2000, Lab, Rgb};
//!
//! let a = Lab::from(Rgb::new(200, 30, 30));
//! let b = Lab::from(Rgb::new(30, 30, 200));
//! assert!(ciede2000(a, b) > 30.0);
//! ```

mod ciede2000;
mod lab;
mod linear_rgb;
mod lut;
mod rgb;
mod xyz;

pub use ciede2000::ciede2000;
pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use lut::srgb_to_linear;
pub use rgb::{PackedColor, Rgb};
pub use xyz::Xyz;
