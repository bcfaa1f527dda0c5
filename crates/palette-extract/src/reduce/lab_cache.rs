//! Per-extraction L\*a\*b\* memo table

use std::collections::HashMap;

use crate::color::{Lab, PackedColor};

/// Lab values keyed by packed color, computed at most once each.
///
/// Owned by a single reduction and dropped with it; nothing is shared
/// between extractions.
#[derive(Debug, Default)]
pub struct LabCache {
    entries: HashMap<PackedColor, Lab>,
}

impl LabCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lab of `color`, converting on first request.
    pub fn get(&mut self, color: PackedColor) -> Lab {
        *self
            .entries
            .entry(color)
            .or_insert_with(|| Lab::from(color.rgb()))
    }

    /// Number of colors converted so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
