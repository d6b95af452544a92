//! Disk row model
//!
//! A row is a fixed-length sequence of disks with as many light disks as dark
//! ones. It starts out alternating (`L D L D ...`) and is only ever changed by
//! swapping two neighbouring disks, so its length and color counts never
//! change after construction.
//!
//! CRITICAL: Length is always even and non-zero.

use crate::models::disk::DiskColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when building or indexing a row
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("Row must contain at least one dark disk")]
    NoDarkDisks,

    #[error("Index {index} out of bounds for row of {len} disks")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Row length {len} is not even")]
    OddLength { len: usize },

    #[error("Row has {light} light disks but {dark} dark disks")]
    Unbalanced { light: usize, dark: usize },
}

/// Ordered row of light and dark disks
///
/// # Example
/// ```
/// use alternating_disks_core_rs::DiskRow;
///
/// let row = DiskRow::new(3);
/// assert_eq!(row.total_count(), 6);
/// assert_eq!(row.to_string(), "L D L D L D");
/// assert!(row.is_alternating());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<DiskColor>", into = "Vec<DiskColor>")]
pub struct DiskRow {
    colors: Vec<DiskColor>,
}

impl DiskRow {
    /// Create an alternating row with `light_count` light disks
    ///
    /// The row holds `2 * light_count` disks, light at every even index and
    /// dark at every odd index.
    ///
    /// # Panics
    /// Panics if `light_count == 0`
    ///
    /// # Example
    /// ```
    /// use alternating_disks_core_rs::{DiskColor, DiskRow};
    ///
    /// let row = DiskRow::new(2);
    /// assert_eq!(row.get(0), DiskColor::Light);
    /// assert_eq!(row.get(1), DiskColor::Dark);
    /// ```
    pub fn new(light_count: usize) -> Self {
        assert!(light_count > 0, "row must contain at least one dark disk");

        let colors = (0..light_count * 2)
            .map(|i| {
                if i % 2 == 0 {
                    DiskColor::Light
                } else {
                    DiskColor::Dark
                }
            })
            .collect();

        Self { colors }
    }

    /// Fallible variant of [`DiskRow::new`]
    pub fn try_new(light_count: usize) -> Result<Self, RowError> {
        if light_count == 0 {
            return Err(RowError::NoDarkDisks);
        }
        Ok(Self::new(light_count))
    }

    /// Total number of disks in the row
    pub fn total_count(&self) -> usize {
        self.colors.len()
    }

    /// Number of dark disks (always half the row)
    pub fn dark_count(&self) -> usize {
        self.total_count() / 2
    }

    /// Number of light disks (always equal to the dark count)
    pub fn light_count(&self) -> usize {
        self.dark_count()
    }

    /// Check if `index` addresses a disk in this row
    pub fn is_index(&self, index: usize) -> bool {
        index < self.total_count()
    }

    /// Get the disk at `index`
    ///
    /// # Panics
    /// Panics if `index` is out of bounds
    pub fn get(&self, index: usize) -> DiskColor {
        assert!(
            self.is_index(index),
            "index {} out of bounds for row of {} disks",
            index,
            self.total_count()
        );
        self.colors[index]
    }

    /// Fallible variant of [`DiskRow::get`]
    pub fn try_get(&self, index: usize) -> Result<DiskColor, RowError> {
        self.colors
            .get(index)
            .copied()
            .ok_or(RowError::IndexOutOfBounds {
                index,
                len: self.total_count(),
            })
    }

    /// Swap the disks at `left_index` and `left_index + 1`
    ///
    /// # Panics
    /// Panics unless both positions are inside the row
    ///
    /// # Example
    /// ```
    /// use alternating_disks_core_rs::DiskRow;
    ///
    /// let mut row = DiskRow::new(2);
    /// row.swap(1);
    /// assert_eq!(row.to_string(), "L L D D");
    /// ```
    pub fn swap(&mut self, left_index: usize) {
        assert!(
            self.is_index(left_index),
            "swap index {} out of bounds for row of {} disks",
            left_index,
            self.total_count()
        );
        let right_index = left_index + 1;
        assert!(
            self.is_index(right_index),
            "swap index {} has no right neighbour in row of {} disks",
            left_index,
            self.total_count()
        );
        self.colors.swap(left_index, right_index);
    }

    /// Fallible variant of [`DiskRow::swap`]
    ///
    /// Leaves the row untouched on error.
    pub fn try_swap(&mut self, left_index: usize) -> Result<(), RowError> {
        let len = self.total_count();
        let right_index = left_index.checked_add(1).filter(|&i| i < len);
        match right_index {
            Some(right_index) => {
                self.colors.swap(left_index, right_index);
                Ok(())
            }
            None if left_index < len => Err(RowError::IndexOutOfBounds {
                index: left_index + 1,
                len,
            }),
            None => Err(RowError::IndexOutOfBounds {
                index: left_index,
                len,
            }),
        }
    }

    /// Check if the row is in alternating format
    ///
    /// Light at every even index, dark at every odd index.
    pub fn is_alternating(&self) -> bool {
        self.colors.iter().enumerate().all(|(i, &color)| {
            if i % 2 == 0 {
                color == DiskColor::Light
            } else {
                color == DiskColor::Dark
            }
        })
    }

    /// Check if the row is fully sorted
    ///
    /// All light disks occupy the lower half, all dark disks the upper half.
    pub fn is_sorted(&self) -> bool {
        let half = self.total_count() / 2;
        self.colors.iter().enumerate().all(|(i, &color)| {
            if i < half {
                color == DiskColor::Light
            } else {
                color == DiskColor::Dark
            }
        })
    }

    /// Read-only view of the disks in order
    pub fn disks(&self) -> &[DiskColor] {
        &self.colors
    }

    /// Count disks of one color
    pub fn count_of(&self, color: DiskColor) -> usize {
        self.colors.iter().filter(|&&c| c == color).count()
    }

    /// Number of (dark, light) pairs where the dark disk sits further left
    ///
    /// Swapping an out-of-order adjacent pair removes exactly one inversion,
    /// so this is the swap count of any adjacent-swap sort of the row.
    pub fn inversion_count(&self) -> usize {
        let mut darks_seen = 0;
        let mut inversions = 0;
        for &color in &self.colors {
            match color {
                DiskColor::Dark => darks_seen += 1,
                DiskColor::Light => inversions += darks_seen,
            }
        }
        inversions
    }

    /// Render the row as space-separated `L`/`D` symbols
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DiskRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", color)?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<DiskColor>> for DiskRow {
    type Error = RowError;

    /// Restore a row from a disk sequence, checking the row invariants
    fn try_from(colors: Vec<DiskColor>) -> Result<Self, Self::Error> {
        let len = colors.len();
        if len % 2 != 0 {
            return Err(RowError::OddLength { len });
        }

        let row = Self { colors };
        let light = row.count_of(DiskColor::Light);
        let dark = row.count_of(DiskColor::Dark);
        if dark == 0 {
            return Err(RowError::NoDarkDisks);
        }
        if light != dark {
            return Err(RowError::Unbalanced { light, dark });
        }
        Ok(row)
    }
}

impl From<DiskRow> for Vec<DiskColor> {
    fn from(row: DiskRow) -> Self {
        row.colors
    }
}
