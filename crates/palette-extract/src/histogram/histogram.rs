//! Color occurrence histogram
//!
//! Counts opaque pixels per [`PackedColor`], remembering the order in which
//! colors were first seen. That discovery order is the tie-breaker for every
//! later stable sort.

use std::collections::HashMap;

use super::source::PixelSource;
use crate::color::{PackedColor, Rgb};

/// One distinct color and how many opaque pixels carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistogramEntry {
    pub color: PackedColor,
    /// Always `>= 1`.
    pub count: u64,
}

/// Insertion-ordered mapping from packed color to pixel count.
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    entries: Vec<HistogramEntry>,
    index: HashMap<PackedColor, usize>,
    total_pixels: u64,
}

impl Histogram {
    /// Scan every pixel of `source`.
    ///
    /// Pixels at the fully transparent end of the source's alpha scale are
    /// skipped entirely. All other pixels count by RGB alone, so the same
    /// color at two different partial alphas lands in one bucket.
    ///
    /// The scan is column-major (`x` outer, `y` inner).
    pub fn scan<S: PixelSource + ?Sized>(source: &S) -> Self {
        let scale = source.alpha_scale();
        let mut histogram = Self::default();

        for x in 0..source.width() {
            for y in 0..source.height() {
                let pixel = source.pixel_at(x, y);
                if scale.is_fully_transparent(pixel.a) {
                    continue;
                }
                histogram.add(pixel.rgb().pack());
            }
        }

        tracing::trace!(
            width = source.width(),
            height = source.height(),
            colors = histogram.len(),
            pixels = histogram.total_pixels,
            "Scanned pixel source"
        );

        histogram
    }

    /// Build from already-opaque colors, in order.
    pub fn from_colors<I>(colors: I) -> Self
    where
        I: IntoIterator<Item = Rgb>,
    {
        let mut histogram = Self::default();
        for rgb in colors {
            histogram.add(rgb.pack());
        }
        histogram
    }

    fn add(&mut self, color: PackedColor) {
        self.total_pixels += 1;
        match self.index.get(&color) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(color, self.entries.len());
                self.entries.push(HistogramEntry { color, count: 1 });
            }
        }
    }

    /// Entries in discovery order.
    pub fn entries(&self) -> &[HistogramEntry] {
        &self.entries
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of opaque pixels counted.
    pub fn total_pixels(&self) -> u64 {
        self.total_pixels
    }

    /// Pixel count of `color`, 0 when absent.
    pub fn count(&self, color: PackedColor) -> u64 {
        self.index
            .get(&color)
            .map_or(0, |&i| self.entries[i].count)
    }

    /// Share of opaque pixels carrying `entry`'s color, in percent.
    pub fn percentage(&self, entry: &HistogramEntry) -> f64 {
        if self.total_pixels == 0 {
            return 0.0;
        }
        entry.count as f64 / self.total_pixels as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::{AlphaScale, Rgba, RgbaBuffer};

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn test_counts_and_percentages() {
        let histogram = Histogram::from_colors([RED, RED, RED, BLUE]);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram.total_pixels(), 4);
        assert_eq!(histogram.count(RED.pack()), 3);
        assert_eq!(histogram.count(BLUE.pack()), 1);
        assert_eq!(histogram.count(Rgb::new(1, 2, 3).pack()), 0);

        let shares: Vec<f64> = histogram
            .entries()
            .iter()
            .map(|e| histogram.percentage(e))
            .collect();
        assert_eq!(shares, vec![75.0, 25.0]);
    }

    #[test]
    fn test_discovery_order() {
        let histogram = Histogram::from_colors([BLUE, RED, BLUE, RED, RED]);
        let order: Vec<PackedColor> = histogram.entries().iter().map(|e| e.color).collect();
        assert_eq!(order, vec![BLUE.pack(), RED.pack()]);
    }

    #[test]
    fn test_scan_is_column_major() {
        // Row 0: red blue, row 1: green red
        let buffer = RgbaBuffer::from_fn(2, 2, |x, y| match (x, y) {
            (0, 0) | (1, 1) => Rgba::opaque(255, 0, 0),
            (1, 0) => Rgba::opaque(0, 0, 255),
            _ => Rgba::opaque(0, 255, 0),
        });
        let histogram = Histogram::scan(&buffer);
        let order: Vec<PackedColor> = histogram.entries().iter().map(|e| e.color).collect();
        // Column 0 (red, green) is visited before column 1 (blue, red)
        assert_eq!(
            order,
            vec![RED.pack(), Rgb::new(0, 255, 0).pack(), BLUE.pack()]
        );
    }

    #[test]
    fn test_transparent_pixels_are_excluded() {
        let buffer = RgbaBuffer::from_fn(1, 2, |_, y| {
            if y == 0 {
                Rgba::new(0, 0, 0, 0)
            } else {
                Rgba::opaque(255, 0, 0)
            }
        });
        let histogram = Histogram::scan(&buffer);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.total_pixels(), 1);
        assert_eq!(histogram.percentage(&histogram.entries()[0]), 100.0);
    }

    #[test]
    fn test_partial_alpha_shares_bucket() {
        let buffer = RgbaBuffer::from_fn(3, 1, |x, _| Rgba::new(10, 20, 30, [255, 128, 1][x as usize]));
        let histogram = Histogram::scan(&buffer);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.count(Rgb::new(10, 20, 30).pack()), 3);
    }

    #[test]
    fn test_transparency_scale_source() {
        // GD-style alpha: 127 transparent, 0 opaque
        let buffer = RgbaBuffer::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba::new(0, 255, 0, 127)
            } else {
                Rgba::new(255, 0, 0, 0)
            }
        })
        .with_alpha_scale(AlphaScale::Transparency { max: 127 });
        let histogram = Histogram::scan(&buffer);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.count(RED.pack()), 1);
    }

    #[test]
    fn test_fully_transparent_image_is_empty() {
        let buffer = RgbaBuffer::from_fn(4, 4, |_, _| Rgba::new(9, 9, 9, 0));
        let histogram = Histogram::scan(&buffer);
        assert!(histogram.is_empty());
        assert_eq!(histogram.total_pixels(), 0);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let colors = (0..97u8).map(|i| Rgb::new(i % 7, i % 5, i % 3));
        let histogram = Histogram::from_colors(colors);
        let total: f64 = histogram
            .entries()
            .iter()
            .map(|e| histogram.percentage(e))
            .sum();
        assert!((total - 100.0).abs() < 1e-9);
    }
}
