//! Cell coordinates.
//!
//! ## Position
//!
//! A signed `(row, col)` pair. Coordinates are signed so the neighbors of
//! edge cells (such as `(0, -1)`) can be expressed; the grid simply skips
//! anything outside its bounds.
//!
//! ## Coordinate keys
//!
//! Presentation layers tag each rendered cell with a `"row-col"` key and
//! hand it back on click. `Position` formats and parses that key:
//!
//! ```
//! use lights_out::core::Position;
//!
//! let pos: Position = "2-3".parse().unwrap();
//! assert_eq!(pos, Position::new(2, 3));
//! assert_eq!(pos.key(), "2-3");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::error::LightsOutError;

/// Offsets of a cell's toggle neighborhood: center, up, down, left, right.
const NEIGHBORHOOD: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// A cell coordinate, possibly outside any particular grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// The cell itself followed by its four orthogonal neighbors.
    ///
    /// Positions are distinct. Grid bounds are not checked here, but
    /// neighbors whose coordinates would overflow `isize` are left out.
    #[must_use]
    pub fn neighborhood(self) -> SmallVec<[Position; 5]> {
        NEIGHBORHOOD
            .iter()
            .filter_map(|&(dr, dc)| {
                Some(Position::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?))
            })
            .collect()
    }

    /// The `"row-col"` key used by presentation layers.
    #[must_use]
    pub fn key(self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = LightsOutError;

    /// Parse a `"row-col"` key. Only non-negative components are accepted,
    /// since rendered cells always carry in-grid coordinates.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || LightsOutError::InvalidCoordinate { key: key.to_string() };

        let (row, col) = key.trim().split_once('-').ok_or_else(invalid)?;
        let is_number = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !is_number(row) || !is_number(col) {
            return Err(invalid());
        }
        let row: usize = row.parse().map_err(|_| invalid())?;
        let col: usize = col.parse().map_err(|_| invalid())?;

        let row = isize::try_from(row).map_err(|_| invalid())?;
        let col = isize::try_from(col).map_err(|_| invalid())?;
        Ok(Self::new(row, col))
    }
}
