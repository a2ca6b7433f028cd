//! Core type bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{BoardConfig, LightsOutError, Position};

/// Map engine errors onto Python exceptions.
///
/// Bad input becomes `ValueError`; playing past the win is `RuntimeError`.
pub(crate) fn to_py_err(err: LightsOutError) -> PyErr {
    match err {
        LightsOutError::GameOver => PyErr::new::<PyRuntimeError, _>(err.to_string()),
        other => PyErr::new::<PyValueError, _>(other.to_string()),
    }
}

/// Python wrapper for BoardConfig.
#[pyclass(name = "BoardConfig")]
#[derive(Clone, Debug)]
pub struct PyBoardConfig(pub BoardConfig);

#[pymethods]
impl PyBoardConfig {
    /// Create a configuration. Validation happens when a game starts.
    #[new]
    #[pyo3(signature = (rows = 5, cols = 5, chance_light_starts_on = 0.5))]
    fn new(rows: usize, cols: usize, chance_light_starts_on: f64) -> Self {
        Self(BoardConfig::new(rows, cols, chance_light_starts_on))
    }

    #[getter]
    fn rows(&self) -> usize {
        self.0.rows
    }

    #[getter]
    fn cols(&self) -> usize {
        self.0.cols
    }

    #[getter]
    fn chance_light_starts_on(&self) -> f64 {
        self.0.start_on_probability
    }

    /// Raise `ValueError` if the config cannot start a game.
    fn validate(&self) -> PyResult<()> {
        self.0.validate().map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        format!(
            "BoardConfig(rows={}, cols={}, chance_light_starts_on={})",
            self.0.rows, self.0.cols, self.0.start_on_probability
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Parse a `"row-col"` coordinate key into a `(row, col)` tuple.
#[pyfunction]
pub fn parse_key(key: &str) -> PyResult<(isize, isize)> {
    let pos: Position = key.parse().map_err(to_py_err)?;
    Ok((pos.row, pos.col))
}

/// Format a `(row, col)` pair as a `"row-col"` coordinate key.
#[pyfunction]
pub fn format_key(row: isize, col: isize) -> String {
    Position::new(row, col).key()
}
