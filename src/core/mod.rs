//! Core board types: positions, participants, board state, configuration.
//!
//! Everything here is shared by both games. The games fix the board width
//! and the occupant type; the core never interprets either.

pub mod position;
pub mod player;
pub mod board;
pub mod config;

pub use position::{Parity, Position};
pub use player::Participant;
pub use board::{BoardState, CellSymbol, EMPTY_SYMBOL};
pub use config::SessionConfig;
