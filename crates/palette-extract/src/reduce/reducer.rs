//! Greedy perceptual merge
//!
//! Colors are ordered by salience, then a reference color walks the first
//! `palette_size` positions and absorbs every later color inside the window
//! that lies within `100 / (palette_size + 1)` CIEDE2000 of it. Important
//! colors come first, so they are the ones that survive.
//!
//! The loop is index based. A merge removes the candidate from the working
//! sequence, so the scan cursor steps back one slot and, unless the reference
//! is the very first color, the reference walk restarts from position 1.
//! After a merge the next reference skips the part of the window the
//! previous reference already covered (the merge-count offset).
//!
//! A pass that merged anything, or that started with a pending offset, is
//! followed by another pass, and no merge is made once only `palette_size`
//! colors remain. The result therefore always has exactly
//! `min(max_palette_size, distinct colors)` entries.
//!
//! Candidates always sit within about `2 * palette_size` slots of the front,
//! and the working sequence is a [`VecDeque`], so a removal shifts only the
//! head and costs O(palette size) however many distinct colors follow.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::num::NonZeroUsize;

use super::entry::ColorEntry;
use super::lab_cache::LabCache;
use crate::color::ciede2000;

/// Work counters of one reduction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReduceStats {
    /// CIEDE2000 evaluations.
    pub comparisons: usize,
    /// Colors absorbed into another.
    pub merges: usize,
    /// Walks over the reference positions.
    pub passes: usize,
    /// Distinct colors converted to Lab.
    pub lab_conversions: usize,
}

/// Reduces scored colors to at most `max_palette_size` entries.
#[derive(Debug, Clone, Copy)]
pub struct PaletteReducer {
    max_palette_size: NonZeroUsize,
}

impl PaletteReducer {
    pub fn new(max_palette_size: NonZeroUsize) -> Self {
        Self { max_palette_size }
    }

    pub fn max_palette_size(&self) -> NonZeroUsize {
        self.max_palette_size
    }

    /// CIEDE2000 distance at or below which two colors merge.
    pub fn merge_threshold(&self) -> f64 {
        100.0 / (self.max_palette_size.get() as f64 + 1.0)
    }

    /// Sort by score and merge. The returned entries are still in score
    /// order; ranking by percentage is the assembler's job.
    pub fn reduce(&self, entries: Vec<ColorEntry>) -> Vec<ColorEntry> {
        self.reduce_with_stats(entries).0
    }

    /// [`reduce`](Self::reduce), also returning work counters.
    pub fn reduce_with_stats(&self, mut entries: Vec<ColorEntry>) -> (Vec<ColorEntry>, ReduceStats) {
        let mut stats = ReduceStats::default();

        // Stable: equal scores keep histogram discovery order
        entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let palette_size = self.max_palette_size.get();
        if entries.len() <= palette_size {
            return (entries, stats);
        }

        let mut colors = VecDeque::from(entries);

        let threshold = self.merge_threshold();
        let mut labs = LabCache::new();
        let mut merge_count = 0usize;

        'passes: loop {
            stats.passes += 1;
            let clean_start = merge_count == 0;
            let mut merged = false;

            // `i` is the 1-based reference position
            let mut i = 0usize;
            while i < palette_size {
                i += 1;
                if colors.len() <= palette_size {
                    break 'passes;
                }

                let reference = i - 1;
                let reference_lab = labs.get(colors[reference].color);

                // `cursor` is the last visited slot, `j` counts window steps
                let mut cursor = reference;
                let mut j = i;

                if merge_count > 0 {
                    let offset = i.max(palette_size.saturating_sub(merge_count + 1));
                    if j < offset {
                        cursor += offset - j;
                        j = offset + 1;
                    } else {
                        j += 1;
                    }
                    merge_count = 0;
                }

                while j <= palette_size {
                    j += 1;
                    let candidate = cursor + 1;
                    if candidate >= colors.len() {
                        break;
                    }
                    cursor = candidate;

                    let distance = ciede2000(reference_lab, labs.get(colors[candidate].color));
                    stats.comparisons += 1;
                    if distance > threshold {
                        continue;
                    }
                    if colors.len() <= palette_size {
                        break 'passes;
                    }

                    tracing::trace!(
                        reference = %colors[reference].color,
                        absorbed = %colors[candidate].color,
                        distance,
                        "Merging colors"
                    );

                    let Some(absorbed) = colors.remove(candidate) else {
                        break;
                    };
                    colors[reference].absorb(absorbed);
                    stats.merges += 1;
                    merged = true;
                    merge_count += 1;

                    // Revisit the slot the next color shifted into
                    cursor -= 1;
                    j -= 1;

                    if i > 1 {
                        i = 0;
                    }
                }
            }

            if !merged && clean_start {
                break;
            }
        }

        stats.lab_conversions = labs.len();
        tracing::debug!(
            remaining = colors.len(),
            threshold,
            comparisons = stats.comparisons,
            merges = stats.merges,
            passes = stats.passes,
            lab_conversions = stats.lab_conversions,
            "Reduced palette"
        );

        (Vec::from(colors), stats)
    }
}
