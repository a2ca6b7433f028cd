//! Game sessions.
//!
//! A `GameSession` owns one board and runs the game state machine:
//! - Starts `Playing` (or `Won` if the board is dealt dark)
//! - Each toggle flips a cell and its neighbors, then checks for a win
//! - `Won` is terminal: further toggles are rejected until `new_game`
//!
//! Sessions can be captured as a `SessionSnapshot` and restored later.

mod game;
mod snapshot;

pub use game::{GameSession, WIN_MESSAGE};
pub use snapshot::SessionSnapshot;
