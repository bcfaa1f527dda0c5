//! Salience ordering and greedy CIEDE2000 merging.

mod entry;
mod lab_cache;
mod reducer;

pub use entry::ColorEntry;
pub use lab_cache::LabCache;
pub use reducer::{PaletteReducer, ReduceStats};
