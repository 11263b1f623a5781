//! Checkers session.

use tracing::{debug, instrument};

use super::{Board, Player};
use crate::core::SessionConfig;

/// A checkers session: the board and whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    config: SessionConfig<Player>,
    board: Board,
    next_player: Player,
}

impl Game {
    /// A fresh game with `White` to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    #[must_use]
    pub fn with_config(config: SessionConfig<Player>) -> Self {
        Self {
            config,
            board: Board::empty(),
            next_player: config.first_player,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    #[must_use]
    pub fn first_player(&self) -> Player {
        self.config.first_player
    }

    /// Back to an empty board with the first player to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!(first_player = %self.config.first_player, "restarting game");
        self.board = Board::empty();
        self.next_player = self.config.first_player;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Next player: {}", self.next_player)
    }
}
