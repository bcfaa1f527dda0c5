#![allow(clippy::excessive_precision, clippy::module_inception)]

//! palette-extract: perceptual color palette extraction
//!
//! Finds the handful of colors a person would name when looking at an
//! image, with the share of the image each one covers.
//!
//! # Quick Start
//!
//! ```
//! use palette_extract::{Extractor, Rgba, RgbaBuffer};
//!
//! let image = RgbaBuffer::from_fn(4, 1, |x, _| match x {
//!     0 | 1 => Rgba::opaque(250, 250, 250),
//!     2 => Rgba::opaque(20, 20, 140),
//!     _ => Rgba::new(0, 0, 0, 0),
//! });
//!
//! let palette = Extractor::new().extract(&image).unwrap();
//! assert_eq!(palette.len(), 2);
//! assert_eq!(palette[0].hex, "#FAFAFA");
//! assert_eq!(palette[0].percentage, 66.67);
//! ```
//!
//! Anything implementing [`PixelSource`] can be scanned; the crate does
//! not decode image files itself.
//!
//! # Pipeline
//!
//! ```text
//! PixelSource
//!     |
//!     v
//! Histogram          (fully transparent pixels skipped)
//!     |
//!     v
//! salience()         (one score per distinct color)
//!     |
//!     v
//! PaletteReducer     (score order, greedy CIEDE2000 merge)
//!     |
//!     v
//! assemble()         (percentage order, truncate, round)
//!     |
//!     v
//! Palette
//! ```
//!
//! # Color Difference
//!
//! Colors are compared in CIE L\*a\*b\* with CIEDE2000. Two colors merge
//! when their distance is at most `100 / (max_palette_size + 1)`: asking
//! for fewer colors widens the net. The higher-scoring color survives a
//! merge and takes over the other's pixel share.
//!
//! Lab values are derived through linear RGB and XYZ (sRGB primaries,
//! D65). The Lab step divides by the white point of that same matrix,
//! so every gray has `a = b = 0`.
//!
//! # Determinism
//!
//! Extraction is pure. The histogram keeps first-seen order (column by
//! column), both sorts are stable, and each call owns its Lab cache.

pub mod api;
pub mod color;
pub mod histogram;
pub mod palette;
pub mod reduce;
pub mod score;


pub use api::{extract, ExtractError, Extractor, DEFAULT_MAX_PALETTE_SIZE};
pub use color::{ciede2000, srgb_to_linear, Lab, LinearRgb, PackedColor, Rgb, Xyz};
pub use histogram::{AlphaScale, Histogram, HistogramEntry, PixelSource, Rgba, RgbaBuffer};
pub use palette::{assemble, Color, Palette, ParseColorError};
pub use reduce::{ColorEntry, PaletteReducer, ReduceStats};
pub use score::salience;
