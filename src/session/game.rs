//! Game session implementation.

use im::Vector;
use log::debug;

use crate::core::{BoardConfig, GameRng, Grid, LightsOutError, Position, Result, DEFAULT_START_ON_PROBABILITY};
use crate::rules::{has_won, initialize, toggle_around, GameStatus};

use super::snapshot::SessionSnapshot;

/// Message shown in place of the board once every light is off.
pub const WIN_MESSAGE: &str = "You Win!";

/// A single game of Lights Out.
///
/// Owns the current grid exclusively; every mutation goes through
/// `&mut self`, so toggles are applied one at a time in call order.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: BoardConfig,
    grid: Grid,
    rng: GameRng,
    status: GameStatus,
    /// Accepted toggles, oldest first.
    moves: Vector<Position>,
}

impl GameSession {
    /// Start a game with a board drawn from `rng`.
    pub fn new(config: BoardConfig, mut rng: GameRng) -> Result<Self> {
        let grid = initialize(&config, &mut rng)?;
        let status = GameStatus::of(&grid);
        debug!(
            "new {}x{} game (seed {}), {} lit, {:?}",
            config.rows,
            config.cols,
            rng.seed(),
            grid.lit_count(),
            status
        );
        Ok(Self {
            config,
            grid,
            rng,
            status,
            moves: Vector::new(),
        })
    }

    /// Start a reproducible game.
    pub fn with_seed(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::new(config, GameRng::new(seed))
    }

    /// Start a game seeded from the operating system.
    pub fn with_entropy(config: BoardConfig) -> Result<Self> {
        Self::new(config, GameRng::from_entropy())
    }

    /// Start from an explicit board.
    ///
    /// The recorded config takes the grid's dimensions and the default
    /// start-on probability; `rng` is used by later `new_game` calls.
    #[must_use]
    pub fn from_grid(grid: Grid, rng: GameRng) -> Self {
        let config = BoardConfig::new(grid.rows(), grid.cols(), DEFAULT_START_ON_PROBABILITY);
        Self::from_parts(config, grid, rng, Vector::new())
    }

    pub(crate) fn from_parts(config: BoardConfig, grid: Grid, rng: GameRng, moves: Vector<Position>) -> Self {
        let status = GameStatus::of(&grid);
        Self {
            config,
            grid,
            rng,
            status,
            moves,
        }
    }

    // === Accessors ===

    /// The configuration this game was built from.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The current board.
    ///
    /// Cloning the returned grid is O(1); clones are unaffected by later toggles.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once every light is off.
    #[must_use]
    pub fn has_won(&self) -> bool {
        has_won(&self.grid)
    }

    /// Accepted toggles in the order they were applied.
    #[must_use]
    pub fn moves(&self) -> &Vector<Position> {
        &self.moves
    }

    /// Number of accepted toggles.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    // === Play ===

    /// Toggle `(row, col)` and its neighbors.
    ///
    /// Off-board coordinates are accepted and only flip whatever neighbors
    /// land on the board. Fails with `GameOver` once the game is won,
    /// leaving the board untouched.
    pub fn toggle(&mut self, row: isize, col: isize) -> Result<GameStatus> {
        if self.status.is_terminal() {
            return Err(LightsOutError::GameOver);
        }

        self.grid = toggle_around(&self.grid, row, col);
        self.moves.push_back(Position::new(row, col));
        self.status = GameStatus::of(&self.grid);

        if self.status.is_terminal() {
            debug!("board cleared after {} moves", self.moves.len());
        }
        Ok(self.status)
    }

    /// Toggle the cell at `pos`.
    pub fn toggle_at(&mut self, pos: Position) -> Result<GameStatus> {
        self.toggle(pos.row, pos.col)
    }

    /// Toggle the cell named by a `"row-col"` key.
    pub fn toggle_key(&mut self, key: &str) -> Result<GameStatus> {
        let pos: Position = key.parse()?;
        self.toggle_at(pos)
    }

    /// Replace the board with a fresh one from the same config.
    ///
    /// The RNG stream continues, so consecutive games differ.
    pub fn new_game(&mut self) -> Result<GameStatus> {
        self.grid = initialize(&self.config, &mut self.rng)?;
        self.moves = Vector::new();
        self.status = GameStatus::of(&self.grid);
        debug!("reset to new game, {} lit, {:?}", self.grid.lit_count(), self.status);
        Ok(self.status)
    }

    // === Snapshots ===

    /// Capture everything needed to resume this game.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config,
            grid: self.grid.clone(),
            rng: self.rng.state(),
            moves: self.moves.clone(),
        }
    }
}

impl std::fmt::Display for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.status.is_terminal() {
            f.write_str(WIN_MESSAGE)
        } else {
            write!(f, "{}", self.grid)
        }
    }
}
