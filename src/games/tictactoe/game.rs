//! Tic-tac-toe game session.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{Board, Player, Position};
use crate::core::{Participant, SessionConfig};
use crate::rules::{lines, GameResult};

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for this player to move.
    InProgress(Player),
    /// Game over.
    Ended(GameResult<Player>),
}

impl GameStatus {
    /// The player to move, `None` once the game has ended.
    #[must_use]
    pub fn next_player(&self) -> Option<Player> {
        match self {
            GameStatus::InProgress(player) => Some(*player),
            GameStatus::Ended(_) => None,
        }
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self, GameStatus::Ended(_))
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(player) => write!(f, "Next player: {}", player),
            GameStatus::Ended(GameResult::Winner(player)) => write!(f, "{} wins!", player),
            GameStatus::Ended(GameResult::Tie) => write!(f, "It's a tie!"),
        }
    }
}

/// A tic-tac-toe session: the current board and whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    config: SessionConfig<Player>,
    board: Board,
    status: GameStatus,
}

/// Builder for creating a `Game`.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: SessionConfig<Player>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Player who moves first, now and after every restart.
    pub fn first_player(mut self, player: Player) -> Self {
        self.config.first_player = player;
        self
    }

    pub fn config(mut self, config: SessionConfig<Player>) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Game {
        Game {
            config: self.config,
            board: Board::empty(),
            status: GameStatus::InProgress(self.config.first_player),
        }
    }
}

impl Game {
    /// A fresh game with `X` to move.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder::new().build()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player to move, `None` once the game has ended.
    #[must_use]
    pub fn next_player(&self) -> Option<Player> {
        self.status.next_player()
    }

    #[must_use]
    pub fn first_player(&self) -> Player {
        self.config.first_player
    }

    /// The result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult<Player>> {
        match self.status {
            GameStatus::Ended(result) => Some(result),
            GameStatus::InProgress(_) => None,
        }
    }

    /// Place the current player's mark at `pos`.
    ///
    /// Does nothing and returns `false` if the game has ended or the cell is
    /// already taken. Otherwise the move is applied, the turn passes to the
    /// opponent or the game ends, and `true` is returned.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, pos: Position) -> bool {
        let GameStatus::InProgress(player) = self.status else {
            debug!(%pos, "game has ended, ignoring move");
            return false;
        };
        if !self.board.is_empty_at(pos) {
            debug!(%pos, "cell is occupied, ignoring move");
            return false;
        }

        self.board = self.board.place(pos, player);

        self.status = if lines::has_ended(&self.board) {
            let result = lines::winner(&self.board).map_or(GameResult::Tie, GameResult::Winner);
            debug!(?result, board = %self.board, "game ended");
            GameStatus::Ended(result)
        } else {
            GameStatus::InProgress(player.opponent())
        };
        true
    }

    /// Back to an empty board with the first player to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!(first_player = %self.config.first_player, "restarting game");
        self.board = Board::empty();
        self.status = GameStatus::InProgress(self.config.first_player);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
