//! Win detection and game results.
//!
//! Pure queries over a `BoardState`:
//! - `lines`: the fixed rows/columns/diagonals and which of them are won
//! - `outcome`: `GameResult` and the ended-or-not check
//!
//! No state lives here; turn progression belongs to the game sessions.

pub mod lines;
pub mod outcome;

pub use lines::{has_ended, has_winner, is_tie, winner, winning_lines, Line, LineKind};
pub use outcome::{outcome, GameResult};
