//! Checkers on a 4×4 board: data only.
//!
//! The board, pieces and players are defined here so a front end can render
//! a position. No movement, jump or capture rules exist; `Game` only tracks
//! the board and whose turn it is, and can restart.

mod game;
mod piece;
mod player;

pub use game::Game;
pub use piece::{Piece, PieceKind};
pub use player::Player;

/// Board width.
pub const WIDTH: usize = 4;

/// A cell of the checkers board.
pub type Position = crate::core::Position<WIDTH>;

/// Content of one cell: `None` when empty.
pub type CellState = Option<Piece>;

/// The checkers board.
pub type Board = crate::core::BoardState<Piece, WIDTH>;
