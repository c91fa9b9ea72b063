//! Starting-board invariant.

use super::Invariant;
use crate::types::Snapshot;

/// Invariant: the history is never empty and begins with the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<[Snapshot]> for StartsEmptyInvariant {
    fn holds(snapshots: &[Snapshot]) -> bool {
        snapshots
            .first()
            .is_some_and(|first| first.occupied_count() == 0)
    }

    fn description() -> &'static str {
        "History starts with a single empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_empty_history_violates() {
        let empty: Vec<Snapshot> = Vec::new();
        assert!(!StartsEmptyInvariant::holds(&empty[..]));
    }

    #[test]
    fn test_marked_start_violates() {
        let start: Board = "....X....".parse().unwrap();
        assert!(!StartsEmptyInvariant::holds(&[start][..]));
    }

    #[test]
    fn test_empty_start_holds() {
        assert!(StartsEmptyInvariant::holds(&[Board::new()][..]));
    }
}
