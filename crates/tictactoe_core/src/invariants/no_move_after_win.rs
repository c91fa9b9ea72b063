//! Terminal-state invariant: no snapshot follows a won board.

use super::Invariant;
use crate::rules::evaluate;
use crate::types::Snapshot;

/// Invariant: only the last snapshot may contain a completed line.
pub struct NoMoveAfterWinInvariant;

impl Invariant<[Snapshot]> for NoMoveAfterWinInvariant {
    fn holds(snapshots: &[Snapshot]) -> bool {
        let Some((_, earlier)) = snapshots.split_last() else {
            return true;
        };
        earlier.iter().all(|board| evaluate(board).is_none())
    }

    fn description() -> &'static str {
        "No move is recorded after a win"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshots(boards: &[&str]) -> Vec<Snapshot> {
        boards.iter().map(|b| b.parse().unwrap()).collect()
    }

    #[test]
    fn test_win_as_last_snapshot_holds() {
        let h = snapshots(&["XX.OO....", "XXXOO...."]);
        assert!(NoMoveAfterWinInvariant::holds(&h[..]));
    }

    #[test]
    fn test_move_after_win_violates() {
        let h = snapshots(&["XXXOO....", "XXXOOO..."]);
        assert!(!NoMoveAfterWinInvariant::holds(&h[..]));
    }
}
