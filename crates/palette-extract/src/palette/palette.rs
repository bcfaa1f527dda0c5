//! Extraction result and final assembly.

use std::cmp::Ordering;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::reduce::ColorEntry;

/// One palette entry.
///
/// Serializes as `{"hex": "#RRGGBB", "rgb": [r, g, b], "percentage": 12.34}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Uppercase `#RRGGBB`.
    pub hex: String,
    pub rgb: [u8; 3],
    /// Share of opaque pixels in percent, rounded to two decimals.
    pub percentage: f64,
}

impl Color {
    pub fn new(rgb: Rgb, percentage: f64) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb: rgb.to_bytes(),
            percentage: round_percentage(percentage),
        }
    }

    #[inline]
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from(self.rgb)
    }
}

/// Ordered palette, most prominent color first.
///
/// Dereferences to `[Color]`; an empty palette is a valid result for an
/// image without opaque pixels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn into_vec(self) -> Vec<Color> {
        self.colors
    }

    /// Sum of rounded percentages. Close to 100 unless the input had
    /// more distinct colors than survived merging.
    pub fn total_percentage(&self) -> f64 {
        self.colors.iter().map(|c| c.percentage).sum()
    }
}

impl Deref for Palette {
    type Target = [Color];

    fn deref(&self) -> &[Color] {
        &self.colors
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self { colors }
    }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Rank reduced entries by percentage (descending, stable) and keep the
/// first `max_palette_size`.
///
/// Ordering uses the unrounded percentages; rounding happens last.
pub fn assemble(mut entries: Vec<ColorEntry>, max_palette_size: usize) -> Palette {
    entries.sort_by(|a, b| {
        b.percentage
            .partial_cmp(&a.percentage)
            .unwrap_or(Ordering::Equal)
    });
    entries.truncate(max_palette_size);

    entries
        .into_iter()
        .map(|entry| Color::new(entry.rgb(), entry.percentage))
        .collect::<Vec<_>>()
        .into()
}

fn round_percentage(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
