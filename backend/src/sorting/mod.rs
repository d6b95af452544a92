//! Sorting Module
//!
//! Two adjacent-swap strategies that move every light disk to the left end
//! of a row and every dark disk to the right end:
//! - **Left-to-right**: repeated forward scans
//! - **Lawnmower**: a forward scan followed by a backward scan, repeated
//!
//! # Critical Invariants
//!
//! 1. **No aliasing**: Sorters work on a private copy; the caller's row is never mutated
//! 2. **Conservation**: Light and dark counts never change, only positions
//! 3. **Bounded work**: Exactly `total_count / 2` outer passes, no convergence check
//! 4. **Accurate tally**: Swap count equals the swaps actually performed
//!
//! # Example
//!
//! ```rust
//! use alternating_disks_core_rs::DiskRow;
//! use alternating_disks_core_rs::sorting::{self, SortStrategy};
//!
//! let before = DiskRow::new(4);
//!
//! let result = sorting::sort_left_to_right(&before);
//! assert_eq!(result.after().to_string(), "L L L L D D D D");
//!
//! let result = SortStrategy::Lawnmower.sort(&before);
//! assert!(result.after().is_sorted());
//! assert!(before.is_alternating());
//! ```

pub mod lawnmower;
pub mod left_to_right;

use crate::models::{DiskRow, SortedDisks, SwapEvent, SwapLog, Sweep};
use serde::{Deserialize, Serialize};

// Re-export public API
pub use lawnmower::{sort_lawnmower, sort_lawnmower_traced};
pub use left_to_right::{sort_left_to_right, sort_left_to_right_traced};

/// Which sorting algorithm to run
///
/// # Example
/// ```
/// use alternating_disks_core_rs::{DiskRow, SortStrategy};
///
/// let strategy: SortStrategy = serde_json::from_str("\"lawnmower\"").unwrap();
/// assert_eq!(strategy, SortStrategy::Lawnmower);
/// assert_eq!(strategy.sort(&DiskRow::new(2)).swap_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    LeftToRight,
    Lawnmower,
}

impl SortStrategy {
    /// All strategies, in declaration order
    pub const ALL: [SortStrategy; 2] = [SortStrategy::LeftToRight, SortStrategy::Lawnmower];

    /// Run this strategy on a copy of `before`
    pub fn sort(self, before: &DiskRow) -> SortedDisks {
        match self {
            SortStrategy::LeftToRight => sort_left_to_right(before),
            SortStrategy::Lawnmower => sort_lawnmower(before),
        }
    }

    /// Run this strategy, recording every swap into `log`
    pub fn sort_traced(self, before: &DiskRow, log: &mut SwapLog) -> SortedDisks {
        match self {
            SortStrategy::LeftToRight => sort_left_to_right_traced(before, log),
            SortStrategy::Lawnmower => sort_lawnmower_traced(before, log),
        }
    }

    /// Stable identifier, matching the serialized form
    pub fn name(self) -> &'static str {
        match self {
            SortStrategy::LeftToRight => "left_to_right",
            SortStrategy::Lawnmower => "lawnmower",
        }
    }
}

/// Number of outer passes both sorters run
pub(crate) fn pass_count(row: &DiskRow) -> usize {
    row.total_count() / 2
}

/// Check that sorting `row` cannot overflow the `u32` swap tally
///
/// Every swap removes exactly one inversion, so the inversion count bounds
/// the tally.
///
/// # Panics
/// Panics if the row has more than `u32::MAX` inversions
pub(crate) fn assert_swap_count_fits(row: &DiskRow) {
    let inversions = row.inversion_count();
    assert!(
        u32::try_from(inversions).is_ok(),
        "swap count {} would overflow u32",
        inversions
    );
}

/// Visit the adjacent pairs at `indices`, swapping every (dark, light) pair
///
/// Returns the number of swaps performed.
pub(crate) fn sweep(
    row: &mut DiskRow,
    indices: impl Iterator<Item = usize>,
    pass: usize,
    direction: Sweep,
    mut log: Option<&mut SwapLog>,
) -> u32 {
    let mut swaps = 0;
    for index in indices {
        if row.get(index) > row.get(index + 1) {
            row.swap(index);
            swaps += 1;
            if let Some(log) = log.as_deref_mut() {
                log.log(SwapEvent {
                    pass,
                    sweep: direction,
                    index,
                });
            }
        }
    }
    swaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DiskColor;

    #[test]
    fn test_strategy_names_match_serde() {
        for strategy in SortStrategy::ALL {
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(json, format!("\"{}\"", strategy.name()));
        }
    }

    fn row_of(colors: &[DiskColor]) -> DiskRow {
        DiskRow::try_from(colors.to_vec()).unwrap()
    }

    #[test]
    fn test_sweep_leaves_in_order_pairs_alone() {
        use DiskColor::{Dark, Light};
        let mut row = row_of(&[Light, Dark, Dark, Light]);

        // (0,1) is L D and (1,2) is D D: only (2,3) is out of order
        let mut log = SwapLog::new();
        let swaps = sweep(&mut row, 0..3, 0, Sweep::Forward, Some(&mut log));
        assert_eq!(swaps, 1);
        assert_eq!(row.to_string(), "L D L D");
        assert_eq!(log.events()[0].index, 2);
    }

    #[test]
    fn test_forward_sweep_carries_dark_disk_along() {
        use DiskColor::{Dark, Light};
        let mut row = row_of(&[Dark, Light, Light, Dark]);

        let swaps = sweep(&mut row, 0..3, 0, Sweep::Forward, None);
        assert_eq!(swaps, 2);
        assert_eq!(row.to_string(), "L L D D");
    }

    #[test]
    fn test_largest_row_within_swap_budget() {
        // 92_682 * 92_681 / 2 = 4_294_930_221 <= u32::MAX
        assert_swap_count_fits(&DiskRow::new(92_682));
    }

    #[test]
    #[should_panic(expected = "would overflow u32")]
    fn test_sort_rejects_row_beyond_swap_budget() {
        // 92_683 * 92_682 / 2 = 4_295_022_903 > u32::MAX
        SortStrategy::LeftToRight.sort(&DiskRow::new(92_683));
    }
}
