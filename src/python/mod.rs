//! Python bindings for the Lights Out engine.
//!
//! Lets a Python front end (notebook, TUI, web handler) drive a game
//! while the rules stay in Rust.
//!
//! # Quick Start
//!
//! ```python
//! import lights_out
//!
//! game = lights_out.LightsOut(rows=5, cols=5, chance_light_starts_on=0.5, seed=42)
//!
//! # Forward a click on cell (2, 3)
//! won = game.toggle(2, 3)
//!
//! # Or dispatch on the rendered cell key
//! game.toggle_key("2-3")
//!
//! print(game)  # board, or "You Win!"
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// lights_out: a Lights Out puzzle engine.
///
/// This module provides:
/// - `LightsOut` game sessions
/// - `BoardConfig` for board dimensions and starting density
/// - Helpers for `"row-col"` coordinate keys
#[pymodule]
fn lights_out(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoardConfig>()?;
    m.add_class::<PyLightsOut>()?;

    m.add_function(wrap_pyfunction!(py_core::parse_key, m)?)?;
    m.add_function(wrap_pyfunction!(py_core::format_key, m)?)?;

    Ok(())
}
