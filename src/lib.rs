//! # grid-games
//!
//! Rules and state engine for two small grid board games: tic-tac-toe on
//! 3×3 and a checkers variant on 4×4.
//!
//! ## Design Principles
//!
//! 1. **Immutable Boards**: `BoardState::set` returns a new board. Old
//!    boards stay valid and unchanged, so they can be shared freely.
//!
//! 2. **Validated Construction**: positions and boards can only be built in
//!    range. Construction is the only thing that returns an `Error`.
//!
//! 3. **Width in the Type**: board width is a const parameter, so a 3×3
//!    position can never index a 4×4 board.
//!
//! ## Modules
//!
//! - `core`: positions, participants, board state, session configuration
//! - `rules`: line-based win detection and game results
//! - `games`: tic-tac-toe session, checkers board and pieces
//! - `error`: construction errors
//!
//! ## Example
//!
//! ```
//! use grid_games::games::tictactoe::{Game, Player, Position};
//! use grid_games::rules::GameResult;
//!
//! let mut game = Game::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.apply_move(Position::new(row, col)?);
//! }
//!
//! assert_eq!(game.result(), Some(GameResult::Winner(Player::X)));
//! assert_eq!(game.status().to_string(), "X wins!");
//! # Ok::<(), grid_games::Error>(())
//! ```

pub mod core;
pub mod error;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardState, CellSymbol, Parity, Participant, Position, SessionConfig,
};

pub use crate::error::{Error, Result};

pub use crate::rules::{GameResult, Line, LineKind};
