//! Board rules.
//!
//! The engine contract a presentation layer calls into:
//! - Build a randomly lit board from a config
//! - Toggle a cell and its neighbors
//! - Detect the win (all lights off)
//!
//! Game flow on top of these lives in `crate::session`.

pub mod engine;

pub use engine::{has_won, initialize, toggle_around, GameStatus};
