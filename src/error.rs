//! Error types for board construction.
//!
//! Only *construction* can fail: building a `Position` out of range, or a
//! `BoardState` from the wrong number of cells. Disallowed moves in a game
//! session are no-ops, not errors.

use thiserror::Error;

/// Errors raised while constructing board values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid {what} {value}, must be between 0 and {limit}")]
    OutOfRange {
        what: &'static str,
        value: usize,
        limit: usize,
    },

    #[error("invalid number of cells: expected {expected}, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid cell character '{character}' at index {index}")]
    InvalidCell { character: char, index: usize },
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
