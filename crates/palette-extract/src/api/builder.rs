//! Extractor builder -- the primary entry point for the crate.
//!
//! [`Extractor`] wires histogram, scoring, reduction and assembly together
//! behind a small fluent API.

use std::num::NonZeroUsize;

use super::error::ExtractError;
use crate::histogram::{Histogram, PixelSource};
use crate::palette::{assemble, Palette};
use crate::reduce::{ColorEntry, PaletteReducer};

/// Palette size used when none is configured.
pub const DEFAULT_MAX_PALETTE_SIZE: usize = 8;

/// Palette extraction builder.
///
/// - Configuration methods consume and return `self`
/// - [`extract()`](Self::extract) takes `&self`, so one extractor can be
///   reused across images
/// - No state survives between extractions
///
/// # Example
///
/// ```
/// use palette_extract::{Extractor, Rgba, RgbaBuffer};
///
/// let image = RgbaBuffer::from_fn(2, 2, |x, y| {
///     if x == 1 && y == 1 {
///         Rgba::opaque(0, 0, 255)
///     } else {
///         Rgba::opaque(255, 0, 0)
///     }
/// });
///
/// let palette = Extractor::new().max_palette_size(5).extract(&image).unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette[0].hex, "#FF0000");
/// assert_eq!(palette[0].percentage, 75.0);
/// assert_eq!(palette[1].hex, "#0000FF");
/// assert_eq!(palette[1].percentage, 25.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    max_palette_size: usize,
}

impl Extractor {
    /// Create an extractor with the default palette size of 8.
    pub fn new() -> Self {
        Self {
            max_palette_size: DEFAULT_MAX_PALETTE_SIZE,
        }
    }

    /// Set the maximum number of palette colors.
    ///
    /// Zero is accepted here and rejected by [`extract()`](Self::extract).
    #[inline]
    pub fn max_palette_size(mut self, size: usize) -> Self {
        self.max_palette_size = size;
        self
    }

    #[inline]
    pub fn palette_size(&self) -> usize {
        self.max_palette_size
    }

    /// Extract the dominant colors of `source`.
    ///
    /// Returns at most `max_palette_size` colors sorted by percentage,
    /// largest first. A source without opaque pixels yields an empty
    /// palette.
    ///
    /// # Errors
    ///
    /// [`ExtractError::InvalidPaletteSize`] when the palette size is zero.
    pub fn extract<S: PixelSource + ?Sized>(&self, source: &S) -> Result<Palette, ExtractError> {
        let size = NonZeroUsize::new(self.max_palette_size).ok_or(
            ExtractError::InvalidPaletteSize {
                requested: self.max_palette_size,
            },
        )?;

        let histogram = Histogram::scan(source);
        if histogram.is_empty() {
            tracing::debug!(
                width = source.width(),
                height = source.height(),
                "No opaque pixels, returning empty palette"
            );
            return Ok(Palette::empty());
        }

        tracing::debug!(
            distinct = histogram.len(),
            opaque_pixels = histogram.total_pixels(),
            max_palette_size = size.get(),
            "Scanned image"
        );

        let entries = ColorEntry::from_histogram(&histogram);
        let reduced = PaletteReducer::new(size).reduce(entries);
        Ok(assemble(reduced, size.get()))
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract up to `max_palette_size` colors from `source`.
///
/// Shorthand for `Extractor::new().max_palette_size(n).extract(source)`.
pub fn extract<S: PixelSource + ?Sized>(
    source: &S,
    max_palette_size: usize,
) -> Result<Palette, ExtractError> {
    Extractor::new()
        .max_palette_size(max_palette_size)
        .extract(source)
}
