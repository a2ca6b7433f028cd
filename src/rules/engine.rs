//! The three board operations.
//!
//! - `initialize`: validate a config and light a fresh grid
//! - `toggle_around`: flip a cell and its orthogonal neighbors
//! - `has_won`: true once every light is off
//!
//! All three are pure with respect to grids: nothing here mutates a grid
//! the caller can still see.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::config::BoardConfig;
use crate::core::error::Result;
use crate::core::grid::Grid;
use crate::core::position::Position;
use crate::core::rng::GameRng;

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one light is on; toggles are accepted.
    Playing,
    /// Every light is off. Terminal.
    Won,
}

impl GameStatus {
    /// Status of a game showing `grid`.
    #[must_use]
    pub fn of(grid: &Grid) -> Self {
        if has_won(grid) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == GameStatus::Won
    }
}

/// Create a board for `config`, lighting each cell with probability
/// `config.start_on_probability` drawn from `rng`.
///
/// Fails with `InvalidConfiguration` for zero dimensions or a probability
/// outside `[0, 1]`.
pub fn initialize(config: &BoardConfig, rng: &mut GameRng) -> Result<Grid> {
    Grid::random(config, rng)
}

/// Flip `(row, col)` and its four orthogonal neighbors, skipping any that
/// fall off the board. Returns the new grid; `grid` is unchanged.
#[must_use]
pub fn toggle_around(grid: &Grid, row: isize, col: isize) -> Grid {
    let center = Position::new(row, col);
    trace!("toggle around {center} on {}x{} grid", grid.rows(), grid.cols());
    grid.toggled_around(center)
}

/// True iff every cell is unlit.
#[must_use]
pub fn has_won(grid: &Grid) -> bool {
    grid.is_dark()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LightsOutError;

    #[test]
    fn test_initialize_dimensions() {
        let mut rng = GameRng::new(42);
        for (rows, cols) in [(1, 1), (1, 7), (5, 5), (8, 3)] {
            let grid = initialize(&BoardConfig::new(rows, cols, 0.5), &mut rng).unwrap();
            assert_eq!(grid.rows(), rows);
            assert_eq!(grid.cols(), cols);
            assert_eq!(grid.len(), rows * cols);
        }
    }

    #[test]
    fn test_initialize_rejects_invalid() {
        let mut rng = GameRng::new(42);
        for config in [
            BoardConfig::new(0, 5, 0.5),
            BoardConfig::new(5, 0, 0.5),
            BoardConfig::new(5, 5, -0.1),
            BoardConfig::new(5, 5, 1.5),
        ] {
            assert!(matches!(
                initialize(&config, &mut rng),
                Err(LightsOutError::InvalidConfiguration { .. })
            ));
        }
    }

    #[test]
    fn test_initialize_probability_extremes() {
        let mut rng = GameRng::new(42);
        let dark = initialize(&BoardConfig::new(5, 5, 0.0), &mut rng).unwrap();
        assert!(has_won(&dark));

        let lit = initialize(&BoardConfig::new(5, 5, 1.0), &mut rng).unwrap();
        assert_eq!(lit.lit_count(), 25);
        assert!(!has_won(&lit));
    }

    #[test]
    fn test_has_won_only_when_dark() {
        assert!(has_won(&Grid::dark(4, 4).unwrap()));
        let one_lit = toggle_around(&Grid::dark(1, 1).unwrap(), 0, 0);
        assert!(!has_won(&one_lit));
    }

    #[test]
    fn test_double_toggle_restores() {
        let grid: Grid = "O.O\n.OO\nO..".parse().unwrap();
        for row in -1..=3 {
            for col in -1..=3 {
                let back = toggle_around(&toggle_around(&grid, row, col), row, col);
                assert_eq!(back, grid, "double toggle at ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_game_status() {
        assert_eq!(GameStatus::of(&Grid::dark(2, 2).unwrap()), GameStatus::Won);
        assert_eq!(GameStatus::of(&Grid::filled(2, 2, true).unwrap()), GameStatus::Playing);
        assert!(GameStatus::Won.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
    }
}
