//! Participant identity.
//!
//! Both games are played by exactly two sides. Each game defines its own
//! closed `Player` enum and implements `Participant` for it, which gives the
//! engine a total `opponent` function and the conventional first mover.

use std::fmt::{Debug, Display};

/// One of exactly two sides of a game.
///
/// `opponent` must be an involution without fixed points:
/// `p.opponent().opponent() == p` and `p.opponent() != p`.
pub trait Participant: Copy + Eq + Debug + Display {
    /// The side that moves first in a fresh game.
    const FIRST: Self;

    /// Both sides, first mover first.
    const ALL: [Self; 2];

    /// The other side.
    #[must_use]
    fn opponent(self) -> Self;
}
