//! Capture-game pieces.
//!
//! A piece is plain data: what kind it is and who owns it. Movement rules
//! are not part of this crate.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::core::CellSymbol;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Man,
    King,
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, owner: Player) -> Self {
        Self { kind, owner }
    }

    #[must_use]
    pub const fn man(owner: Player) -> Self {
        Self::new(PieceKind::Man, owner)
    }

    #[must_use]
    pub const fn king(owner: Player) -> Self {
        Self::new(PieceKind::King, owner)
    }
}

/// Men use the owner's symbol (`b`, `w`), kings its uppercase (`B`, `W`).
impl CellSymbol for Piece {
    fn symbol(&self) -> char {
        let symbol = self.owner.symbol();
        match self.kind {
            PieceKind::Man => symbol,
            PieceKind::King => symbol.to_ascii_uppercase(),
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        let owner = Player::from_symbol(symbol.to_ascii_lowercase())?;
        let kind = if symbol.is_ascii_uppercase() {
            PieceKind::King
        } else {
            PieceKind::Man
        };
        Some(Self::new(kind, owner))
    }
}
