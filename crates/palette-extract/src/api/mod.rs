//! Public API for the palette-extract crate.
//!
//! [`Extractor`] runs the whole pipeline; [`ExtractError`] is its error type.

mod builder;
mod error;

pub use builder::{extract, Extractor, DEFAULT_MAX_PALETTE_SIZE};
pub use error::ExtractError;
