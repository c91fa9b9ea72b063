//! Derived game status.

use crate::rules::{evaluate, is_full};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the game as seen from one snapshot.
///
/// Status is never stored; it is recomputed from the snapshot and the
/// cursor that selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing and `next` is to move.
    InProgress {
        /// Player whose turn it is.
        next: Player,
    },
    /// Game ended in a win.
    Won(Player),
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Derives the status of `board`, displayed at history index `cursor`.
    #[instrument(skip(board))]
    pub fn derive(board: &Board, cursor: usize) -> Self {
        if let Some(result) = evaluate(board) {
            GameStatus::Won(*result.winner())
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: Player::for_turn(cursor),
            }
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true once no further moves are possible.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings() {
        assert_eq!(
            GameStatus::InProgress { next: Player::X }.to_string(),
            "Next player: X"
        );
        assert_eq!(
            GameStatus::InProgress { next: Player::O }.to_string(),
            "Next player: O"
        );
        assert_eq!(GameStatus::Won(Player::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::Won(Player::O).to_string(), "Winner: O");
        assert_eq!(GameStatus::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_next_player_follows_cursor_parity() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(
            GameStatus::derive(&board, 1),
            GameStatus::InProgress { next: Player::O }
        );
        assert_eq!(
            GameStatus::derive(&Board::new(), 0),
            GameStatus::InProgress { next: Player::X }
        );
    }

    #[test]
    fn test_win_takes_precedence_over_full_board() {
        let board: Board = "XXX OOX OXO".parse().unwrap();
        let status = GameStatus::derive(&board, 9);
        assert_eq!(status, GameStatus::Won(Player::X));
        assert!(status.is_over());
    }

    #[test]
    fn test_draw() {
        let board: Board = "XOX XOO OXO".parse().unwrap();
        let status = GameStatus::derive(&board, 9);
        assert_eq!(status, GameStatus::Draw);
        assert_eq!(status.winner(), None);
        assert!(status.is_over());
    }
}
