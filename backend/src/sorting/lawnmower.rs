//! Lawnmower sorter
//!
//! Like the left-to-right sorter, but every outer iteration sweeps the row
//! twice: once forward from index 0, then straight back from the last pair to
//! index 0. The swap condition is the same in both directions (dark directly
//! before light); only the visiting order changes. The forward sweep carries
//! dark disks right and the backward sweep carries light disks left, so the
//! row usually settles in fewer iterations than a forward-only scan.

use crate::models::{DiskRow, SortedDisks, SwapLog, Sweep};
use crate::sorting::{assert_swap_count_fits, pass_count, sweep};

/// Sort a row using the lawnmower algorithm
///
/// `before` is expected to be alternating. It is copied, never modified.
///
/// # Example
/// ```
/// use alternating_disks_core_rs::{sort_lawnmower, DiskRow};
///
/// let result = sort_lawnmower(&DiskRow::new(4));
/// assert_eq!(result.after().to_string(), "L L L L D D D D");
/// assert_eq!(result.swap_count(), 6);
/// ```
pub fn sort_lawnmower(before: &DiskRow) -> SortedDisks {
    run(before, None)
}

/// Same as [`sort_lawnmower`], recording every swap into `log`
pub fn sort_lawnmower_traced(before: &DiskRow, log: &mut SwapLog) -> SortedDisks {
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
        swap_count += sweep(
            &mut row,
            (0..pair_count).rev(),
            pass,
            Sweep::Backward,
            log.as_deref_mut(),
        );
    }

    SortedDisks::new(row, swap_count)
}
