//! Adobe Color Swatch (`.aco`) writer.
//!
//! A version 1 section followed by a version 2 section, both big-endian:
//!
//! ```text
//! u16 version, u16 count
//! per color: u16 space (0 = RGB), u16 r, u16 g, u16 b, u16 0
//! version 2 only: u32 name length (incl. terminator), UTF-16 name, u16 0
//! ```

use palette_extract::Color;

use super::PaletteExporter;
use crate::error::ExportError;

const RGB_SPACE: u16 = 0;

#[derive(Debug, Clone, Copy, Default)]
pub struct AcoExporter;

impl PaletteExporter for AcoExporter {
    fn export(&self, colors: &[Color]) -> Result<Vec<u8>, ExportError> {
        let count = u16::try_from(colors.len())
            .map_err(|_| ExportError::InvalidLayout(format!("{} colors", colors.len())))?;

        let mut out = Vec::with_capacity(4 + colors.len() * 40);

        put_u16(&mut out, 1);
        put_u16(&mut out, count);
        for color in colors {
            put_color_spec(&mut out, color);
        }

        put_u16(&mut out, 2);
        put_u16(&mut out, count);
        for color in colors {
            put_color_spec(&mut out, color);
            put_name(&mut out, &color.hex);
        }

        Ok(out)
    }

    fn content_type(&self) -> &'static str {
        "application/octet-stream"
    }

    fn default_filename(&self) -> &'static str {
        "aco_file.aco"
    }
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

/// Channels are widened to 16 bits by repeating the byte (`0xAB -> 0xABAB`).
fn put_color_spec(out: &mut Vec<u8>, color: &Color) {
    let [r, g, b] = color.rgb;
    put_u16(out, RGB_SPACE);
    put_u16(out, u16::from(r) * 257);
    put_u16(out, u16::from(g) * 257);
    put_u16(out, u16::from(b) * 257);
    put_u16(out, 0);
}

fn put_name(out: &mut Vec<u8>, name: &str) {
    let units: Vec<u16> = name.encode_utf16().collect();
    out.extend_from_slice(&(units.len() as u32 + 1).to_be_bytes());
    for unit in units {
        put_u16(out, unit);
    }
    put_u16(out, 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette_extract::Rgb;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_color_layout() {
        let colors = [Color::new(Rgb::new(0xAB, 0x00, 0xFF), 100.0)];
        let bytes = AcoExporter.export(&colors).unwrap();

        let mut expected: Vec<u8> = vec![
            0, 1, 0, 1, // v1, one color
            0, 0, 0xAB, 0xAB, 0, 0, 0xFF, 0xFF, 0, 0, // RGB record
            0, 2, 0, 1, // v2, one color
            0, 0, 0xAB, 0xAB, 0, 0, 0xFF, 0xFF, 0, 0, // RGB record
            0, 0, 0, 8, // "#AB00FF" + terminator
        ];
        for c in "#AB00FF".bytes() {
            expected.extend_from_slice(&[0, c]);
        }
        expected.extend_from_slice(&[0, 0]);

        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_size_grows_per_color() {
        let colors = crate::exporters::test_support::sample_colors();
        let bytes = AcoExporter.export(&colors).unwrap();
        // 2 headers, 3 v1 records, 3 v2 records with 7-char names
        let v2_record = 10 + 4 + 2 * 7 + 2;
        assert_eq!(bytes.len(), 2 * 4 + 3 * 10 + 3 * v2_record);
        assert_eq!(&bytes[..4], &[0, 1, 0, 3]);
        assert_eq!(&bytes[34..38], &[0, 2, 0, 3]);
    }

    #[test]
    fn test_metadata() {
        assert_eq!(AcoExporter.content_type(), "application/octet-stream");
        assert_eq!(AcoExporter.default_filename(), "aco_file.aco");
    }
}
