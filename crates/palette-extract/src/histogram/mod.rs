//! Pixel histogram
//!
//! Turns a [`PixelSource`] into per-color pixel counts, skipping fully
//! transparent pixels.

mod histogram;
mod source;

pub use histogram::{Histogram, HistogramEntry};
pub use source::{AlphaScale, PixelSource, Rgba, RgbaBuffer};
