//! Game session bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{BoardConfig, GameRng, Grid};
use crate::rules::GameStatus;
use crate::session::{GameSession, SessionSnapshot};

use super::py_core::{to_py_err, PyBoardConfig};

/// Python wrapper for GameSession.
///
/// Drives one Lights Out board. A front end renders `board()` (or
/// `to_numpy()`), forwards clicks to `toggle`, and shows the win message
/// once `has_won()` is true.
#[pyclass(name = "LightsOut")]
pub struct PyLightsOut {
    session: GameSession,
}

#[pymethods]
impl PyLightsOut {
    /// Start a new game.
    ///
    /// # Arguments
    /// - rows, cols: Board dimensions (positive)
    /// - chance_light_starts_on: Probability each light starts lit, in [0, 1]
    /// - seed: RNG seed for a reproducible board; random if omitted
    #[new]
    #[pyo3(signature = (rows = 5, cols = 5, chance_light_starts_on = 0.5, seed = None))]
    fn new(rows: usize, cols: usize, chance_light_starts_on: f64, seed: Option<u64>) -> PyResult<Self> {
        let config = BoardConfig::new(rows, cols, chance_light_starts_on);
        Self::start(config, seed)
    }

    /// Start a new game from a `BoardConfig`.
    #[staticmethod]
    #[pyo3(signature = (config, seed = None))]
    fn from_config(config: &PyBoardConfig, seed: Option<u64>) -> PyResult<Self> {
        Self::start(config.0, seed)
    }

    /// Start from explicit rows of booleans.
    #[staticmethod]
    #[pyo3(signature = (rows, seed = None))]
    fn from_board(rows: Vec<Vec<bool>>, seed: Option<u64>) -> PyResult<Self> {
        let grid = Grid::from_rows(rows.as_slice()).map_err(to_py_err)?;
        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self {
            session: GameSession::from_grid(grid, rng),
        })
    }

    /// Toggle a cell and its neighbors. Returns True if this toggle won the game.
    fn toggle(&mut self, row: isize, col: isize) -> PyResult<bool> {
        let status = self.session.toggle(row, col).map_err(to_py_err)?;
        Ok(status == GameStatus::Won)
    }

    /// Toggle the cell named by a `"row-col"` key.
    fn toggle_key(&mut self, key: &str) -> PyResult<bool> {
        let status = self.session.toggle_key(key).map_err(to_py_err)?;
        Ok(status == GameStatus::Won)
    }

    /// True once every light is off.
    fn has_won(&self) -> bool {
        self.session.has_won()
    }

    /// Deal a fresh board with the same configuration.
    fn new_game(&mut self) -> PyResult<()> {
        self.session.new_game().map_err(to_py_err)?;
        Ok(())
    }

    /// Board as a list of rows.
    fn board(&self) -> Vec<Vec<bool>> {
        self.session.grid().to_rows()
    }

    /// Board as a 2-D boolean numpy array.
    fn to_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<bool>>> {
        let grid = self.session.grid();
        PyArray1::from_vec_bound(py, grid.to_cells()).reshape([grid.rows(), grid.cols()])
    }

    /// Whether a single cell is lit.
    fn is_lit(&self, row: isize, col: isize) -> bool {
        self.session.grid().is_lit(row, col)
    }

    /// Save the game as bytes.
    fn snapshot(&self) -> PyResult<Vec<u8>> {
        self.session.snapshot().to_bytes().map_err(to_py_err)
    }

    /// Resume a game saved with `snapshot()`.
    #[staticmethod]
    fn restore(bytes: Vec<u8>) -> PyResult<Self> {
        let session = SessionSnapshot::from_bytes(&bytes)
            .and_then(|snapshot| snapshot.restore())
            .map_err(to_py_err)?;
        Ok(Self { session })
    }

    #[getter]
    fn rows(&self) -> usize {
        self.session.grid().rows()
    }

    #[getter]
    fn cols(&self) -> usize {
        self.session.grid().cols()
    }

    /// Number of accepted toggles in this game.
    #[getter]
    fn move_count(&self) -> usize {
        self.session.move_count()
    }

    #[getter]
    fn config(&self) -> PyBoardConfig {
        PyBoardConfig(*self.session.config())
    }

    fn __str__(&self) -> String {
        self.session.to_string()
    }

    fn __repr__(&self) -> String {
        let status = match self.session.status() {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
        };
        format!(
            "LightsOut({}x{}, lit={}, moves={}, status={})",
            self.session.grid().rows(),
            self.session.grid().cols(),
            self.session.grid().lit_count(),
            self.session.move_count(),
            status
        )
    }
}

impl PyLightsOut {
    fn start(config: BoardConfig, seed: Option<u64>) -> PyResult<Self> {
        let session = match seed {
            Some(seed) => GameSession::with_seed(config, seed),
            None => GameSession::with_entropy(config),
        }
        .map_err(to_py_err)?;
        Ok(Self { session })
    }
}
