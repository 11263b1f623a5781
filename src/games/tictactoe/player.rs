//! Line-game participants.

use serde::{Deserialize, Serialize};

use crate::core::{CellSymbol, Participant};

/// Player in the line-game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O.
    O,
}

/// Content of one cell: `None` when empty.
pub type Mark = Option<Player>;

impl Participant for Player {
    const FIRST: Self = Player::X;
    const ALL: [Self; 2] = [Player::X, Player::O];

    fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl CellSymbol for Player {
    fn symbol(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' => Some(Player::X),
            'O' => Some(Player::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
