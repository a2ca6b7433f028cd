//! # lights-out
//!
//! A Lights Out puzzle engine: a rectangular grid of lights, randomly lit
//! at the start, where toggling a cell also toggles its four orthogonal
//! neighbors. The game is won when every light is off.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No rendering or input handling. Front ends
//!    call in with a cell coordinate and redraw from the returned state.
//!
//! 2. **Persistent Boards**: Grids are `im-rs` vectors. Toggling returns a
//!    new grid that shares structure with the old one, so any grid a caller
//!    holds is never changed underneath it.
//!
//! 3. **Injectable Randomness**: Boards are dealt from a seedable
//!    `GameRng`. Seed it for reproducible games and tests; use
//!    `GameRng::from_entropy()` for real play.
//!
//! ## Example
//!
//! ```
//! use lights_out::{BoardConfig, GameSession, GameStatus};
//!
//! let game = GameSession::with_seed(BoardConfig::new(3, 3, 0.0), 42).unwrap();
//! assert_eq!(game.status(), GameStatus::Won);
//!
//! let grid = lights_out::rules::toggle_around(game.grid(), 1, 1);
//! assert_eq!(grid.lit_count(), 5);
//! assert!(game.grid().is_dark());
//! ```
//!
//! ## Modules
//!
//! - `core`: Positions, configuration, RNG, grids, errors
//! - `rules`: `initialize`, `toggle_around`, `has_won`
//! - `session`: `GameSession` state machine and snapshots
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, GameRng, GameRngState, Grid, LightsOutError, Position, Result,
};

pub use crate::rules::{has_won, initialize, toggle_around, GameStatus};

pub use crate::session::{GameSession, SessionSnapshot, WIN_MESSAGE};
