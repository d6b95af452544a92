//! Disk color model
//!
//! Every position in a row holds exactly one disk, either light or dark.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color of a single disk
///
/// Variant order matters: `Light < Dark`, so an adjacent pair is out of
/// order exactly when `left > right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiskColor {
    /// Belongs on the left side of a sorted row
    Light,

    /// Belongs on the right side of a sorted row
    Dark,
}

impl DiskColor {
    /// Single-letter code used by row renderings (`L` or `D`)
    pub fn symbol(self) -> char {
        match self {
            DiskColor::Light => 'L',
            DiskColor::Dark => 'D',
        }
    }
}

impl fmt::Display for DiskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_orders_before_dark() {
        assert!(DiskColor::Light < DiskColor::Dark);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(DiskColor::Light.to_string(), "L");
        assert_eq!(DiskColor::Dark.to_string(), "D");
    }
}
