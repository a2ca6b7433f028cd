//! Board configuration.
//!
//! A `BoardConfig` fixes a game instance: its dimensions and the chance
//! that each light starts on. Configs are plain data; `validate()` is
//! called by everything that builds a board from one.

use serde::{Deserialize, Serialize};

use super::error::{LightsOutError, Result};

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 5;

/// Default number of columns.
pub const DEFAULT_COLS: usize = 5;

/// Default chance that any cell is lit at the start of a game.
pub const DEFAULT_START_ON_PROBABILITY: f64 = 0.5;

/// Immutable parameters for a single game.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (must be positive).
    pub rows: usize,

    /// Number of columns (must be positive).
    pub cols: usize,

    /// Chance each cell is lit at start, in `[0, 1]`.
    pub start_on_probability: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start_on_probability: DEFAULT_START_ON_PROBABILITY,
        }
    }
}

impl BoardConfig {
    /// Create a configuration with explicit values.
    ///
    /// No validation happens here; see [`BoardConfig::validate`].
    #[must_use]
    pub const fn new(rows: usize, cols: usize, start_on_probability: f64) -> Self {
        Self { rows, cols, start_on_probability }
    }

    /// Set the number of rows.
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the number of columns.
    #[must_use]
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Set the chance each cell starts lit.
    #[must_use]
    pub fn with_start_on_probability(mut self, probability: f64) -> Self {
        self.start_on_probability = probability;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Reject zero dimensions and probabilities outside `[0, 1]` (NaN included).
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(LightsOutError::invalid_config("rows must be positive"));
        }
        if self.cols == 0 {
            return Err(LightsOutError::invalid_config("cols must be positive"));
        }
        if self.rows.checked_mul(self.cols).is_none() || isize::try_from(self.rows.max(self.cols)).is_err() {
            return Err(LightsOutError::invalid_config(format!(
                "{}x{} board is too large",
                self.rows, self.cols
            )));
        }
        if !(0.0..=1.0).contains(&self.start_on_probability) {
            return Err(LightsOutError::invalid_config(format!(
                "start_on_probability must be within [0, 1], got {}",
                self.start_on_probability
            )));
        }
        Ok(())
    }
}
