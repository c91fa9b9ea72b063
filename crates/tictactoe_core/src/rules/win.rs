//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// Rows top-to-bottom, then columns left-to-right, then the
/// top-left/bottom-right diagonal, then the top-right/bottom-left one.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line: who owns it and which cells it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct WinResult {
    /// Player holding all three cells.
    winner: Player,
    /// Cell indices of the line, ascending.
    line: [usize; 3],
}

impl WinResult {
    /// Returns true if `index` is one of the winning cells.
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Finds the first completed line on the board.
///
/// When several lines are complete (only possible on boards no real game
/// produces) the first one in [`LINES`] order is reported.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a)? {
            Cell::Occupied(player)
                if board.get(b) == Some(Cell::Occupied(player))
                    && board.get(c) == Some(Cell::Occupied(player)) =>
            {
                Some(WinResult {
                    winner: player,
                    line,
                })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let result = evaluate(&board("XXX OO. ...")).unwrap();
        assert_eq!(*result.winner(), Player::X);
        assert_eq!(result.line(), &[0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let result = evaluate(&board("XXO XO. O..")).unwrap();
        assert_eq!(*result.winner(), Player::O);
        assert_eq!(result.line(), &[2, 4, 6]);
        assert!(result.contains(4));
        assert!(!result.contains(0));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(evaluate(&board("XX. ... ...")), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(evaluate(&board("XOX ... ...")), None);
    }

    #[test]
    fn test_first_line_in_order_wins_tie() {
        // Top row and left column are both X; the row is checked first.
        let result = evaluate(&board("XXX X.. X..")).unwrap();
        assert_eq!(result.line(), &[0, 1, 2]);

        // Bottom row and left column are both complete; rows come first.
        let b = board("X.O X.O XXX");
        let x = Some(Cell::Occupied(Player::X));
        assert!([0, 3, 6].iter().all(|&i| b.get(i) == x));
        let result = evaluate(&b).unwrap();
        assert_eq!(*result.winner(), Player::X);
        assert_eq!(result.line(), &[6, 7, 8]);
    }
}
