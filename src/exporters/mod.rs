//! Palette exporters
//!
//! Each format implements [`PaletteExporter`]; [`export`] picks one from an
//! [`ExportFormat`] and refuses to write an empty palette.

pub mod aco;
pub mod css;
pub mod json;
pub mod preview;
pub mod sass;

use std::fmt;
use std::str::FromStr;

use palette_extract::Color;

use crate::error::ExportError;
use crate::models::{AppConfig, PreviewConfig};

pub use aco::AcoExporter;
pub use css::CssExporter;
pub use json::JsonExporter;
pub use preview::PngExporter;
pub use sass::SassExporter;

/// A palette output format.
pub trait PaletteExporter {
    /// Encode `colors` in this format.
    fn export(&self, colors: &[Color]) -> Result<Vec<u8>, ExportError>;

    /// MIME type of the encoded output.
    fn content_type(&self) -> &'static str;

    /// File name used when the caller does not pick one.
    fn default_filename(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Adobe Photoshop swatch file
    Aco,
    /// CSS color and background classes
    Css,
    /// SASS variables
    Sass,
    /// PNG preview of the swatches
    Png,
    /// JSON array of colors
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Aco,
        ExportFormat::Css,
        ExportFormat::Sass,
        ExportFormat::Png,
        ExportFormat::Json,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Aco => "aco",
            ExportFormat::Css => "css",
            ExportFormat::Sass => "sass",
            ExportFormat::Png => "png",
            ExportFormat::Json => "json",
        }
    }

    /// Standard output file name for this format.
    pub fn default_filename(self) -> &'static str {
        match self {
            ExportFormat::Aco => "aco_file.aco",
            ExportFormat::Css => "css_file.css",
            ExportFormat::Sass => "sass_file.scss",
            ExportFormat::Png => "color_export.png",
            ExportFormat::Json => "palette.json",
        }
    }

    /// Build the exporter for this format.
    pub fn exporter(self, options: &ExportOptions) -> Box<dyn PaletteExporter> {
        match self {
            ExportFormat::Aco => Box::new(AcoExporter),
            ExportFormat::Css => Box::new(CssExporter::new(
                options.comment.clone(),
                options.minify,
            )),
            ExportFormat::Sass => Box::new(SassExporter::new(options.comment.clone())),
            ExportFormat::Png => Box::new(PngExporter::new(options.preview.clone())),
            ExportFormat::Json => Box::new(JsonExporter),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown export format: {0} (expected aco, css, sass, png or json)")]
pub struct UnknownFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aco" => Ok(ExportFormat::Aco),
            "css" => Ok(ExportFormat::Css),
            // `less` was the historic alias for the variables exporter
            "sass" | "scss" | "less" => Ok(ExportFormat::Sass),
            "png" => Ok(ExportFormat::Png),
            "json" => Ok(ExportFormat::Json),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Format-specific settings for [`export`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportOptions {
    /// Header comment for CSS and SASS.
    pub comment: Option<String>,
    /// Minify CSS output.
    pub minify: bool,
    /// Layout of the PNG preview.
    pub preview: PreviewConfig,
}

impl ExportOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            comment: config.export.comment.clone(),
            minify: config.export.minify,
            preview: config.preview.clone(),
        }
    }
}

/// Encode `colors` as `format`.
pub fn export(
    colors: &[Color],
    format: ExportFormat,
    options: &ExportOptions,
) -> Result<Vec<u8>, ExportError> {
    if colors.is_empty() {
        return Err(ExportError::EmptyPalette);
    }

    let bytes = format.exporter(options).export(colors)?;
    tracing::debug!(
        format = %format,
        colors = colors.len(),
        bytes = bytes.len(),
        "Exported palette"
    );
    Ok(bytes)
}

#[cfg(test)]
pub(crate) mod test_support {
    use palette_extract::{Color, Rgb};

    pub fn sample_colors() -> Vec<Color> {
        vec![
            Color::new(Rgb::new(255, 0, 0), 62.5),
            Color::new(Rgb::new(0, 128, 255), 25.0),
            Color::new(Rgb::new(18, 52, 86), 12.5),
        ]
    }
}
