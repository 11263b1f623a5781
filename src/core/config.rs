//! Session configuration.
//!
//! Board width and the piece vocabulary are fixed per game at compile time.
//! What a host may choose at runtime is who moves first.

use serde::{Deserialize, Serialize};

use super::player::Participant;

/// Settings for a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionConfig<P> {
    /// Side to move on an empty board, and again after every restart.
    pub first_player: P,
}

impl<P: Participant> SessionConfig<P> {
    #[must_use]
    pub fn new(first_player: P) -> Self {
        Self { first_player }
    }
}

impl<P: Participant> Default for SessionConfig<P> {
    fn default() -> Self {
        Self::new(P::FIRST)
    }
}
