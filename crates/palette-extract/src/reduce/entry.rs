//! Working entries of one extraction

use crate::color::{PackedColor, Rgb};
use crate::histogram::Histogram;
use crate::score::salience;

/// A distinct color as it moves through scoring and merging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorEntry {
    pub color: PackedColor,
    /// Pixels represented, including those of absorbed colors.
    pub pixel_count: u64,
    /// Share of opaque pixels in percent, including absorbed colors.
    pub percentage: f64,
    /// Salience, assigned once from the color's own histogram count.
    pub score: f64,
}

impl ColorEntry {
    /// Score every histogram entry, keeping discovery order.
    pub fn from_histogram(histogram: &Histogram) -> Vec<ColorEntry> {
        let distinct = histogram.len();
        histogram
            .entries()
            .iter()
            .map(|entry| ColorEntry {
                color: entry.color,
                pixel_count: entry.count,
                percentage: histogram.percentage(entry),
                score: salience(entry.color.rgb(), entry.count, distinct),
            })
            .collect()
    }

    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.color.rgb()
    }

    /// Fold `other` into this entry. The color and score stay this entry's.
    pub fn absorb(&mut self, other: ColorEntry) {
        self.pixel_count += other.pixel_count;
        self.percentage += other.percentage;
    }
}
