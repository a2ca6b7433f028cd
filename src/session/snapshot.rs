//! Serializable session snapshots.
//!
//! A snapshot carries the config, the board, the RNG position and the move
//! history. Restoring one yields a session that continues exactly where
//! the original left off, including the boards later `new_game` calls
//! will deal.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, GameRng, GameRngState, Grid, LightsOutError, Position, Result};

use super::game::GameSession;

/// Saved state of a `GameSession`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: BoardConfig,
    pub grid: Grid,
    pub rng: GameRngState,
    pub moves: Vector<Position>,
}

impl SessionSnapshot {
    /// Rebuild the session.
    ///
    /// Fails if the config is invalid or disagrees with the grid's shape.
    pub fn restore(&self) -> Result<GameSession> {
        self.config
            .validate()
            .map_err(|err| LightsOutError::invalid_snapshot(err.to_string()))?;

        if (self.config.rows, self.config.cols) != (self.grid.rows(), self.grid.cols()) {
            return Err(LightsOutError::invalid_snapshot(format!(
                "config is {}x{} but grid is {}x{}",
                self.config.rows,
                self.config.cols,
                self.grid.rows(),
                self.grid.cols()
            )));
        }

        Ok(GameSession::from_parts(
            self.config,
            self.grid.clone(),
            GameRng::from_state(&self.rng),
            self.moves.clone(),
        ))
    }

    /// Encode as compact bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|err| LightsOutError::invalid_snapshot(err.to_string()))
    }

    /// Decode bytes produced by [`SessionSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|err| LightsOutError::invalid_snapshot(err.to_string()))
    }
}
