//! Error taxonomy for the engine and sessions.
//!
//! Out-of-bounds toggle coordinates are deliberately absent: they are
//! silent no-ops for the affected cells, not failures.

use thiserror::Error;

/// Errors surfaced by board construction and game sessions.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LightsOutError {
    /// Board parameters are unusable (zero dimensions, probability outside `[0, 1]`).
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the configuration.
        reason: String,
    },

    /// A toggle was attempted after the board went dark.
    #[error("the game is already won")]
    GameOver,

    /// A presentation-layer coordinate key could not be parsed.
    #[error("invalid coordinate key {key:?}, expected \"row-col\"")]
    InvalidCoordinate {
        /// The key as received.
        key: String,
    },

    /// Snapshot data could not be turned back into a session.
    #[error("invalid snapshot: {reason}")]
    InvalidSnapshot {
        /// Why the snapshot was rejected.
        reason: String,
    },
}

impl LightsOutError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    pub(crate) fn invalid_snapshot(reason: impl Into<String>) -> Self {
        Self::InvalidSnapshot { reason: reason.into() }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LightsOutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LightsOutError::invalid_config("rows must be positive");
        assert_eq!(err.to_string(), "invalid configuration: rows must be positive");

        assert_eq!(LightsOutError::GameOver.to_string(), "the game is already won");

        let err = LightsOutError::InvalidCoordinate { key: "a-b".to_string() };
        assert_eq!(err.to_string(), "invalid coordinate key \"a-b\", expected \"row-col\"");
    }
}
