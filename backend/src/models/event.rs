//! Swap tracing for sort replay and debugging.
//!
//! A traced sort records one [`SwapEvent`] per adjacent swap, in the order
//! the swaps happen. Replaying the events on a copy of the input row yields
//! the sorted row.
//!
//! # Example
//!
//! ```rust
//! use alternating_disks_core_rs::models::{Sweep, SwapEvent, SwapLog};
//!
//! let mut log = SwapLog::new();
//! log.log(SwapEvent { pass: 0, sweep: Sweep::Forward, index: 1 });
//!
//! assert_eq!(log.len(), 1);
//! assert_eq!(log.events()[0].index, 1);
//! ```

use crate::models::row::DiskRow;
use serde::{Deserialize, Serialize};

/// Traversal direction of the sweep a swap happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sweep {
    /// Scanning from index 0 upward
    Forward,

    /// Scanning from the last pair downward
    Backward,
}

/// One adjacent swap performed by a sorter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapEvent {
    /// Outer iteration (0-indexed)
    pub pass: usize,

    /// Direction of the sweep within the pass
    pub sweep: Sweep,

    /// Left index of the swapped pair
    pub index: usize,
}

/// Swap log for storing and querying swap events.
///
/// This is a simple wrapper around Vec<SwapEvent> with convenience methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapLog {
    events: Vec<SwapEvent>,
}

impl SwapLog {
    /// Create a new empty swap log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: SwapEvent) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[SwapEvent] {
        &self.events
    }

    /// Get events for a specific outer pass
    pub fn events_in_pass(&self, pass: usize) -> Vec<&SwapEvent> {
        self.events.iter().filter(|e| e.pass == pass).collect()
    }

    /// Get events from sweeps in one direction
    pub fn events_of_sweep(&self, sweep: Sweep) -> Vec<&SwapEvent> {
        self.events.iter().filter(|e| e.sweep == sweep).collect()
    }

    /// Apply every logged swap, in order, to `row`
    ///
    /// # Panics
    /// Panics if an event indexes outside the row
    pub fn replay(&self, row: &mut DiskRow) {
        for event in &self.events {
            row.swap(event.index);
        }
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(pass: usize, sweep: Sweep, index: usize) -> SwapEvent {
        SwapEvent { pass, sweep, index }
    }

    #[test]
    fn test_filters() {
        let mut log = SwapLog::new();
        log.log(event(0, Sweep::Forward, 1));
        log.log(event(0, Sweep::Backward, 3));
        log.log(event(1, Sweep::Forward, 2));

        assert_eq!(log.events_in_pass(0).len(), 2);
        assert_eq!(log.events_in_pass(1).len(), 1);
        assert_eq!(log.events_of_sweep(Sweep::Backward).len(), 1);
        assert!(log.events_in_pass(7).is_empty());
    }

    #[test]
    fn test_replay_applies_swaps_in_order() {
        let mut log = SwapLog::new();
        log.log(event(0, Sweep::Forward, 1));

        let mut row = DiskRow::new(2);
        log.replay(&mut row);
        assert_eq!(row.to_string(), "L L D D");
    }

    #[test]
    fn test_clear() {
        let mut log = SwapLog::new();
        log.log(event(0, Sweep::Forward, 0));
        log.clear();
        assert!(log.is_empty());
    }
}
