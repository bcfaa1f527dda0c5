//! Palette types and assembly
//!
//! The extraction result and the step that ranks reduced colors into it.

mod error;
mod palette;

pub use error::ParseColorError;
pub use palette::{assemble, Color, Palette};
