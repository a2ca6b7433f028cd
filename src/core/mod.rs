//! Core engine types: positions, configuration, RNG, grid, errors.
//!
//! Everything here is plain data with no notion of a running game.
//! Sessions in `crate::session` compose these into a playable board.

pub mod error;
pub mod position;
pub mod config;
pub mod rng;
pub mod grid;

pub use error::{LightsOutError, Result};
pub use position::Position;
pub use config::{BoardConfig, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_START_ON_PROBABILITY};
pub use rng::{GameRng, GameRngState};
pub use grid::Grid;
