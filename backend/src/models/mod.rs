//! Domain models for the alternating disks problem

pub mod disk;
pub mod event;
pub mod outcome;
pub mod row;

// Re-exports
pub use disk::DiskColor;
pub use event::{SwapEvent, SwapLog, Sweep};
pub use outcome::SortedDisks;
pub use row::{DiskRow, RowError};
