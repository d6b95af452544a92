//! Alternating Disks Core - Rust Engine
//!
//! Adjacent-swap sorting of a row of alternating light and dark disks.
//!
//! # Architecture
//!
//! - **models**: Domain types (DiskColor, DiskRow, SortedDisks, SwapLog)
//! - **sorting**: Sorting strategies (left-to-right, lawnmower)
//!
//! # Critical Invariants
//!
//! 1. A row always holds as many light disks as dark disks
//! 2. Rows change only through adjacent swaps
//! 3. Sorters never mutate the row they are given

// Module declarations
pub mod models;
pub mod sorting;

// Re-exports for convenience
pub use models::{
    disk::DiskColor,
    event::{SwapEvent, SwapLog, Sweep},
    outcome::SortedDisks,
    row::{DiskRow, RowError},
};
pub use sorting::{
    sort_lawnmower, sort_lawnmower_traced, sort_left_to_right, sort_left_to_right_traced,
    SortStrategy,
};
