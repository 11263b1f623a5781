//! Tic-tac-toe on a 3×3 board.
//!
//! - Players `X` and `O`, `X` moves first by default
//! - A player wins by holding exactly one complete row, column or diagonal
//! - A full board without a winner is a tie
//!
//! `Game` is the session a front end drives: it applies moves, tracks whose
//! turn it is and restarts.

mod game;
mod player;

pub use game::{Game, GameBuilder, GameStatus};
pub use player::{Mark, Player};

/// Board width.
pub const WIDTH: usize = 3;

/// A cell of the tic-tac-toe board.
pub type Position = crate::core::Position<WIDTH>;

/// The tic-tac-toe board.
pub type Board = crate::core::BoardState<Player, WIDTH>;
