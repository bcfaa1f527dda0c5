//! SASS variable export.

use palette_extract::Color;

use super::css::comment_block;
use super::PaletteExporter;
use crate::error::ExportError;

/// One `$color_RRGGBB: #RRGGBB;` line per color.
#[derive(Debug, Clone, Default)]
pub struct SassExporter {
    comment: Option<String>,
}

impl SassExporter {
    pub fn new(comment: Option<String>) -> Self {
        Self { comment }
    }

    pub fn render(&self, colors: &[Color]) -> String {
        let header = self.comment.as_deref().map(comment_block).unwrap_or_default();
        colors.iter().fold(header, |mut sass, color| {
            sass.push_str(&format!(
                "$color_{}: {};\n",
                color.hex.trim_start_matches('#'),
                color.hex
            ));
            sass
        })
    }
}

impl PaletteExporter for SassExporter {
    fn export(&self, colors: &[Color]) -> Result<Vec<u8>, ExportError> {
        Ok(self.render(colors).into_bytes())
    }

    fn content_type(&self) -> &'static str {
        "text/x-scss"
    }

    fn default_filename(&self) -> &'static str {
        "sass_file.scss"
    }
}
