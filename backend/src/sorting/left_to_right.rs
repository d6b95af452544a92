//! Left-to-right sorter
//!
//! Each pass scans every adjacent pair from the left end to the right end and
//! swaps any dark disk sitting directly before a light one. A dark disk caught
//! by a swap keeps moving right for the rest of the pass, and every light disk
//! moves exactly one step left per pass while a dark disk precedes it. A light
//! disk is never more than `k` steps from its place in a balanced row of `2k`
//! disks (`D...D L...L` is the worst case), so `k` passes always finish the
//! job.

use crate::models::{DiskRow, SortedDisks, SwapLog, Sweep};
use crate::sorting::{assert_swap_count_fits, pass_count, sweep};

/// Sort a row using the left-to-right algorithm
///
/// `before` is expected to be alternating. It is copied, never modified.
///
/// # Example
/// ```
/// use alternating_disks_core_rs::{sort_left_to_right, DiskRow};
///
/// let result = sort_left_to_right(&DiskRow::new(2));
/// assert_eq!(result.after().to_string(), "L L D D");
/// assert_eq!(result.swap_count(), 1);
/// ```
pub fn sort_left_to_right(before: &DiskRow) -> SortedDisks {
    run(before, None)
}

/// Same as [`sort_left_to_right`], recording every swap into `log`
pub fn sort_left_to_right_traced(before: &DiskRow, log: &mut SwapLog) -> SortedDisks {
    run(before, Some(log))
}

fn run(before: &DiskRow, mut log: Option<&mut SwapLog>) -> SortedDisks {
    assert_swap_count_fits(before);
    let mut row = before.clone();
    let mut swap_count = 0;
    let pair_count = row.total_count() - 1;

    for pass in 0..pass_count(&row) {
        swap_count += sweep(
            &mut row,
            0..pair_count,
            pass,
            Sweep::Forward,
            log.as_deref_mut(),
        );
    }

    SortedDisks::new(row, swap_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pair_needs_no_swaps() {
        let result = sort_left_to_right(&DiskRow::new(1));
        assert_eq!(result.after(), &DiskRow::new(1));
        assert_eq!(result.swap_count(), 0);
    }

    #[test]
    fn test_only_forward_sweeps_logged() {
        let mut log = SwapLog::new();
        let result = sort_left_to_right_traced(&DiskRow::new(5), &mut log);

        assert_eq!(log.len(), result.swap_count() as usize);
        assert!(log.events_of_sweep(Sweep::Backward).is_empty());
    }

    #[test]
    fn test_first_pass_carries_every_dark_disk() {
        // L D L D L D: first pass swaps (1,2) then (3,4)
        let mut log = SwapLog::new();
        sort_left_to_right_traced(&DiskRow::new(3), &mut log);

        let first: Vec<usize> = log.events_in_pass(0).iter().map(|e| e.index).collect();
        assert_eq!(first, vec![1, 3]);
    }
}
