//! The light grid.
//!
//! A `Grid` is a fixed-size, row-major board of lit/unlit cells backed by
//! an `im::Vector`. Cloning is O(1) and every toggle returns a new grid
//! that shares structure with the old one, so earlier grids stay valid and
//! unchanged no matter how many toggles follow.
//!
//! ## Text form
//!
//! Grids print one row per line with `O` for lit and `.` for unlit, and
//! parse back from the same form:
//!
//! ```
//! use lights_out::core::Grid;
//!
//! let grid: Grid = "...\nOO.\n...".parse().unwrap();
//! assert_eq!(grid.lit_count(), 2);
//! assert_eq!(grid.to_string(), "...\nOO.\n...");
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::config::BoardConfig;
use super::error::{LightsOutError, Result};
use super::position::Position;
use super::rng::GameRng;

const LIT: char = 'O';
const UNLIT: char = '.';

/// A `rows x cols` board of boolean cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid", into = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vector<bool>,
}

impl Grid {
    /// Create a grid with every cell set to `lit`.
    pub fn filled(rows: usize, cols: usize, lit: bool) -> Result<Self> {
        BoardConfig::new(rows, cols, 0.0).validate()?;
        Ok(Self {
            rows,
            cols,
            cells: std::iter::repeat(lit).take(rows * cols).collect(),
        })
    }

    /// Create a fully dark grid.
    pub fn dark(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, false)
    }

    /// Light each cell independently with the configured probability.
    pub fn random(config: &BoardConfig, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;
        let cells = (0..config.cell_count())
            .map(|_| rng.gen_bool(config.start_on_probability))
            .collect();
        Ok(Self {
            rows: config.rows,
            cols: config.cols,
            cells,
        })
    }

    /// Build a grid from nested rows.
    ///
    /// Rows must be non-empty and all the same length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if let Some(bad) = rows.iter().position(|r| r.as_ref().len() != cols) {
            return Err(LightsOutError::invalid_config(format!(
                "row {bad} has {} cells, expected {cols}",
                rows[bad].as_ref().len()
            )));
        }
        let cells = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect::<Vec<_>>();
        Self::from_cells(rows.len(), cols, cells)
    }

    /// Build a grid from a flat row-major cell list.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Result<Self> {
        BoardConfig::new(rows, cols, 0.0).validate()?;
        if cells.len() != rows * cols {
            return Err(LightsOutError::invalid_config(format!(
                "{} cells do not fill a {rows}x{cols} grid",
                cells.len()
            )));
        }
        Ok(Self {
            rows,
            cols,
            cells: cells.into_iter().collect(),
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: grids have at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether a position lies on this grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Cell state at a position, or `None` off the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<bool> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Check whether the cell at `(row, col)` is lit. Off-grid cells are dark.
    #[must_use]
    pub fn is_lit(&self, row: isize, col: isize) -> bool {
        self.get(Position::new(row, col)).unwrap_or(false)
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// True when every light is off.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    /// The on-grid cells a toggle at `center` would flip.
    #[must_use]
    pub fn affected_cells(&self, center: Position) -> SmallVec<[Position; 5]> {
        center
            .neighborhood()
            .into_iter()
            .filter(|&pos| self.contains(pos))
            .collect()
    }

    /// Return a new grid with `center` and its orthogonal neighbors flipped.
    ///
    /// Off-grid positions are skipped. `self` is left untouched.
    #[must_use]
    pub fn toggled_around(&self, center: Position) -> Self {
        let mut next = self.clone();
        for pos in center.neighborhood() {
            if let Some(i) = self.index_of(pos) {
                next.cells[i] = !self.cells[i];
            }
        }
        next
    }

    /// Iterate over rows as vectors of cells.
    pub fn iter_rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        (0..self.rows).map(move |r| {
            let start = r * self.cols;
            (start..start + self.cols).map(|i| self.cells[i]).collect()
        })
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().collect()
    }

    /// Copy out as a flat row-major list.
    #[must_use]
    pub fn to_cells(&self) -> Vec<bool> {
        self.cells.iter().copied().collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for lit in row {
                write!(f, "{}", if lit { LIT } else { UNLIT })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = LightsOutError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        LIT => Ok(true),
                        UNLIT => Ok(false),
                        other => Err(LightsOutError::invalid_config(format!(
                            "unexpected cell {other:?}, expected '{LIT}' or '{UNLIT}'"
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(&rows)
    }
}

/// Serialized form of a grid, validated on the way back in.
#[derive(Clone, Serialize, Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl From<Grid> for RawGrid {
    fn from(grid: Grid) -> Self {
        Self {
            rows: grid.rows,
            cols: grid.cols,
            cells: grid.to_cells(),
        }
    }
}

impl TryFrom<RawGrid> for Grid {
    type Error = LightsOutError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        Grid::from_cells(raw.rows, raw.cols, raw.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn test_filled_and_dark() {
        let lit = Grid::filled(2, 3, true).unwrap();
        assert_eq!(lit.len(), 6);
        assert_eq!(lit.lit_count(), 6);
        assert!(!lit.is_dark());

        let dark = Grid::dark(4, 1).unwrap();
        assert_eq!((dark.rows(), dark.cols()), (4, 1));
        assert!(dark.is_dark());
        assert!(!dark.is_empty());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(Grid::dark(0, 3).is_err());
        assert!(Grid::dark(3, 0).is_err());
        let empty: [[bool; 0]; 0] = [];
        assert!(Grid::from_rows(&empty).is_err());
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(&[vec![true, false], vec![true]]).unwrap_err();
        assert_eq!(err, LightsOutError::invalid_config("row 1 has 1 cells, expected 2"));
    }

    #[test]
    fn test_from_cells_rejects_wrong_count() {
        assert!(Grid::from_cells(2, 2, vec![false; 3]).is_err());
        assert!(Grid::from_cells(2, 2, vec![false; 4]).is_ok());
    }

    #[test]
    fn test_get_and_bounds() {
        let g = grid("O.\n.O");
        assert_eq!(g.get(Position::new(0, 0)), Some(true));
        assert_eq!(g.get(Position::new(0, 1)), Some(false));
        assert_eq!(g.get(Position::new(-1, 0)), None);
        assert_eq!(g.get(Position::new(2, 0)), None);
        assert!(g.is_lit(1, 1));
        assert!(!g.is_lit(5, 5));
    }

    #[test]
    fn test_random_respects_extremes() {
        let mut rng = GameRng::new(3);
        let off = Grid::random(&BoardConfig::new(6, 4, 0.0), &mut rng).unwrap();
        assert!(off.is_dark());

        let on = Grid::random(&BoardConfig::new(6, 4, 1.0), &mut rng).unwrap();
        assert_eq!(on.lit_count(), 24);
    }

    #[test]
    fn test_random_is_seeded() {
        let config = BoardConfig::default();
        let a = Grid::random(&config, &mut GameRng::new(99)).unwrap();
        let b = Grid::random(&config, &mut GameRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_rejects_bad_config() {
        let result = Grid::random(&BoardConfig::new(3, 3, 2.0), &mut GameRng::new(1));
        assert!(matches!(result, Err(LightsOutError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_toggle_corner() {
        let g = Grid::dark(3, 3).unwrap().toggled_around(Position::new(0, 0));
        assert_eq!(g, grid("OO.\nO..\n..."));
    }

    #[test]
    fn test_toggle_center() {
        let g = Grid::dark(3, 3).unwrap().toggled_around(Position::new(1, 1));
        assert_eq!(g, grid(".O.\nOOO\n.O."));
    }

    #[test]
    fn test_toggle_single_cell_grid() {
        let g = Grid::dark(1, 1).unwrap().toggled_around(Position::new(0, 0));
        assert_eq!(g.to_rows(), vec![vec![true]]);
    }

    #[test]
    fn test_toggle_off_grid_center() {
        let g = Grid::dark(3, 3).unwrap();
        // Just outside the left edge: only (1, 0) is on the grid.
        assert_eq!(g.toggled_around(Position::new(1, -1)), grid("...\nO..\n..."));
        // Far away: nothing changes.
        assert_eq!(g.toggled_around(Position::new(10, 10)), g);
    }

    #[test]
    fn test_toggle_leaves_original_untouched() {
        let before = grid("...\nOO.\n...");
        let kept = before.clone();
        let after = before.toggled_around(Position::new(1, 0));

        assert_eq!(before, kept);
        assert_eq!(after, grid("O..\n...\nO.."));
    }

    #[test]
    fn test_affected_cells() {
        let g = Grid::dark(3, 3).unwrap();
        assert_eq!(g.affected_cells(Position::new(0, 0)).len(), 3);
        assert_eq!(g.affected_cells(Position::new(1, 1)).len(), 5);
        assert_eq!(g.affected_cells(Position::new(0, 1)).len(), 4);
        assert!(g.affected_cells(Position::new(-5, 0)).is_empty());
    }

    #[test]
    fn test_rows_round_trip() {
        let rows = vec![vec![false, true, false], vec![true, true, false]];
        let g = Grid::from_rows(&rows).unwrap();
        assert_eq!(g.to_rows(), rows);
        assert_eq!(g.to_cells(), vec![false, true, false, true, true, false]);
    }

    #[test]
    fn test_display() {
        let g = Grid::from_rows(&[[false, false, false], [true, true, false]]).unwrap();
        assert_eq!(g.to_string(), "...\nOO.");
    }

    #[test]
    fn test_parse_rejects_unknown_cells() {
        assert!("O.\n.X".parse::<Grid>().is_err());
        assert!("O.\n.".parse::<Grid>().is_err());
        assert!("".parse::<Grid>().is_err());
    }

    #[test]
    fn test_serde_validates() {
        let g = grid("O.O\n.O.");
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);

        let bad = r#"{"rows":2,"cols":2,"cells":[true]}"#;
        assert!(serde_json::from_str::<Grid>(bad).is_err());
    }
}
