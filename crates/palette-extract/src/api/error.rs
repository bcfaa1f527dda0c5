//! Error type for the extraction API.

/// Errors returned by [`Extractor::extract`](crate::Extractor::extract).
///
/// An image without opaque pixels is not an error; it produces an empty
/// palette.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// A palette must hold at least one color.
    #[error("invalid palette size {requested}: must be at least 1")]
    InvalidPaletteSize { requested: usize },
}
