//! The two games built on the core.
//!
//! - `tictactoe`: 3×3 line-game with win detection and a playable session
//! - `checkers`: 4×4 capture-game board and pieces, no move rules

pub mod checkers;
pub mod tictactoe;
