//! Capture-game participants.

use serde::{Deserialize, Serialize};

use crate::core::{CellSymbol, Participant};

/// Player in the capture-game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    Black,
    /// Moves first.
    White,
}

impl Participant for Player {
    const FIRST: Self = Player::White;
    const ALL: [Self; 2] = [Player::White, Player::Black];

    fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl CellSymbol for Player {
    fn symbol(&self) -> char {
        match self {
            Player::Black => 'b',
            Player::White => 'w',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'b' => Some(Player::Black),
            'w' => Some(Player::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}
