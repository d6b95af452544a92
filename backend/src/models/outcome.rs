//! Sort outcome model
//!
//! The result of running a sorter: the final row plus how many adjacent
//! swaps it took to get there.

use crate::models::row::DiskRow;
use serde::{Deserialize, Serialize};

/// Final row state and swap count produced by a sorter
///
/// Owns an independent copy of the final row. Immutable once built.
///
/// The swap count is a `u32`; sorters refuse rows whose inversion count
/// exceeds `u32::MAX` (alternating rows past 92_682 light disks).
///
/// # Example
/// ```
/// use alternating_disks_core_rs::{DiskRow, SortedDisks};
///
/// let result = SortedDisks::new(DiskRow::new(1), 0);
/// assert!(result.after().is_sorted());
/// assert_eq!(result.swap_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedDisks {
    /// Row after sorting
    after: DiskRow,

    /// Adjacent swaps performed
    swap_count: u32,
}

impl SortedDisks {
    /// Create a result from the final row and the swaps that produced it
    ///
    /// # Arguments
    /// * `after` - Row after sorting (taken by value, no aliasing)
    /// * `swap_count` - Adjacent swaps performed
    pub fn new(after: DiskRow, swap_count: u32) -> Self {
        Self { after, swap_count }
    }

    /// Row after sorting
    pub fn after(&self) -> &DiskRow {
        &self.after
    }

    /// Number of adjacent swaps performed
    pub fn swap_count(&self) -> u32 {
        self.swap_count
    }

    /// Consume the result, keeping only the final row
    pub fn into_after(self) -> DiskRow {
        self.after
    }
}
