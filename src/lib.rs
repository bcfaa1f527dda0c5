//! Colorsift - perceptual palette extraction
//!
//! Decodes images, extracts their dominant colors with `palette-extract`
//! and exports the result as swatch files, stylesheets or a preview image.
//! This library exposes modules for integration testing.

pub mod error;
pub mod exporters;
pub mod models;
pub mod services;
