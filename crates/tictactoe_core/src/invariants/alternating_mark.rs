//! Alternating mark invariant: each step places one mark for the player on turn.

use super::Invariant;
use crate::types::{Cell, Player, Snapshot};

/// Invariant: every snapshot differs from its predecessor by exactly one
/// cell going from empty to the mark of the player on turn.
///
/// Step `i` (producing snapshot `i`) is played by X when `i` is odd and by
/// O when it is even.
pub struct AlternatingMarkInvariant;

impl AlternatingMarkInvariant {
    fn step_holds(before: &Snapshot, after: &Snapshot, moves_played: usize) -> bool {
        let expected = Cell::Occupied(Player::for_turn(moves_played));
        let mut changed = before
            .cells()
            .iter()
            .zip(after.cells().iter())
            .filter(|(b, a)| b != a);

        match (changed.next(), changed.next()) {
            (Some((Cell::Empty, placed)), None) => *placed == expected,
            _ => false,
        }
    }
}

impl Invariant<[Snapshot]> for AlternatingMarkInvariant {
    fn holds(snapshots: &[Snapshot]) -> bool {
        snapshots
            .windows(2)
            .enumerate()
            .all(|(moves_played, pair)| Self::step_holds(&pair[0], &pair[1], moves_played))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player on turn"
    }
}
