//! JSON export.

use palette_extract::Color;

use super::PaletteExporter;
use crate::error::ExportError;

/// Pretty-printed array of `{hex, rgb, percentage}` objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl PaletteExporter for JsonExporter {
    fn export(&self, colors: &[Color]) -> Result<Vec<u8>, ExportError> {
        let mut bytes = serde_json::to_vec_pretty(colors)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn default_filename(&self) -> &'static str {
        "palette.json"
    }
}
