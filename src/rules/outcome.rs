//! Game results.

use serde::{Deserialize, Serialize};

use super::lines;
use crate::core::BoardState;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult<P> {
    /// Single winner.
    Winner(P),
    /// Full board, no winner.
    Tie,
}

impl<P: PartialEq> GameResult<P> {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: P) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Tie => false,
        }
    }
}

/// The result of the board if the game on it has ended.
///
/// Returns `None` while the game continues.
#[must_use]
pub fn outcome<T, const W: usize>(board: &BoardState<T, W>) -> Option<GameResult<T>>
where
    T: Clone + PartialEq,
{
    if let Some(winner) = lines::winner(board) {
        Some(GameResult::Winner(winner))
    } else if board.is_full() {
        Some(GameResult::Tie)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player};

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::O);
        assert!(!result.is_winner(Player::X));
        assert!(result.is_winner(Player::O));

        let tie: GameResult<Player> = GameResult::Tie;
        assert!(!tie.is_winner(Player::X));
        assert!(!tie.is_winner(Player::O));
    }

    #[test]
    fn test_outcome() {
        let in_progress: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(outcome(&in_progress), None);

        let won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(outcome(&won), Some(GameResult::Winner(Player::X)));

        let tie: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(outcome(&tie), Some(GameResult::Tie));
    }

    #[test]
    fn test_outcome_agrees_with_has_ended() {
        for s in ["XXX/OOO/...", "XXX/.../XXX", "X../.O./..X", "XOX/XOO/OXX"] {
            let board: Board = s.parse().unwrap();
            assert_eq!(outcome(&board).is_some(), lines::has_ended(&board), "{}", s);
        }
    }
}
