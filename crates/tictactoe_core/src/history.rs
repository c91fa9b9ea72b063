//! Move history with branch-and-overwrite semantics.
//!
//! A [`History`] is an ordered list of snapshots, starting from the empty
//! board. Recording a move from an earlier cursor discards every snapshot
//! after the cursor before appending, so the history is always a single
//! line rather than a tree.

use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::rules::evaluate;
use crate::types::{Board, CELL_COUNT, Player, Snapshot};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Reasons a requested move leaves the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The displayed snapshot already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),

    /// The cell index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cursor does not select a snapshot.
    #[display("Cursor {} is past the end of a history of length {}", cursor, len)]
    CursorOutOfRange {
        /// Requested cursor.
        cursor: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

impl std::error::Error for MoveError {}

/// Errors raised when navigating or rebuilding a history.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum HistoryError {
    /// The requested cursor does not select a snapshot.
    #[display("Move #{} does not exist (history has {} entries)", target, len)]
    OutOfRange {
        /// Requested cursor.
        target: usize,
        /// Number of snapshots in the history.
        len: usize,
    },

    /// A raw snapshot list breaks one or more history invariants.
    #[display("Inconsistent history: {}", _0)]
    Inconsistent(String),
}

impl std::error::Error for HistoryError {}

/// Ordered list of board snapshots, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Snapshot>", into = "Vec<Snapshot>")]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
        }
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot at `cursor`.
    pub fn get(&self, cursor: usize) -> Option<&Snapshot> {
        self.snapshots.get(cursor)
    }

    /// Returns the most recent snapshot.
    pub fn latest(&self) -> &Snapshot {
        // The constructor and `record` never leave the list empty.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Index of the most recent snapshot.
    pub fn last_cursor(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Checks whether `cell` may be played from the snapshot at `cursor`.
    ///
    /// Returns the player who would make the move.
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn check_move(&self, cursor: usize, cell: usize) -> Result<Player, MoveError> {
        let board = self.get(cursor).ok_or(MoveError::CursorOutOfRange {
            cursor,
            len: self.len(),
        })?;

        if cell >= CELL_COUNT {
            return Err(MoveError::OutOfBounds(cell));
        }

        if !board.is_empty(cell) {
            return Err(MoveError::CellOccupied(cell));
        }

        if let Some(result) = evaluate(board) {
            return Err(MoveError::GameOver(*result.winner()));
        }

        Ok(Player::for_turn(cursor))
    }

    /// Records a move at `cell` from the snapshot at `cursor`.
    ///
    /// Snapshots after `cursor` are discarded before the new one is
    /// appended. Returns the new cursor, which always selects the
    /// appended snapshot. On error the history is left untouched.
    #[instrument(skip(self), fields(len = self.len()))]
    pub fn record(&mut self, cursor: usize, cell: usize) -> Result<usize, MoveError> {
        let player = self.check_move(cursor, cell)?;
        let next = self.snapshots[cursor].with_mark(cell, player);

        let discarded = self.snapshots.len() - (cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Overwriting future snapshots");
        }
        self.snapshots.truncate(cursor + 1);
        self.snapshots.push(next);

        debug_assert!(
            HistoryInvariants::check_all(&self.snapshots[..]).is_ok(),
            "History invariants violated after recording a move"
        );

        debug!(%player, cell, cursor = self.last_cursor(), "Move recorded");
        Ok(self.last_cursor())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Snapshot>> for History {
    type Error = HistoryError;

    /// Rebuilds a history from raw snapshots, checking every invariant.
    fn try_from(snapshots: Vec<Snapshot>) -> Result<Self, Self::Error> {
        HistoryInvariants::check_all(&snapshots[..]).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            HistoryError::Inconsistent(descriptions)
        })?;
        Ok(Self { snapshots })
    }
}

impl From<History> for Vec<Snapshot> {
    fn from(history: History) -> Self {
        history.snapshots
    }
}

/// Plays `cell` from the snapshot at `cursor`.
///
/// Returns the new history and cursor. Invalid moves (occupied cell,
/// game already won, index off the board) return the inputs unchanged.
#[instrument(skip(history), fields(len = history.len()))]
pub fn play_move(history: &History, cursor: usize, cell: usize) -> (History, usize) {
    let mut next = history.clone();
    match next.record(cursor, cell) {
        Ok(new_cursor) => (next, new_cursor),
        Err(e) => {
            debug!(error = %e, "Move ignored");
            (history.clone(), cursor)
        }
    }
}

/// Moves the cursor to `target` without touching the history.
///
/// # Panics
///
/// Panics if `target` does not select a snapshot; offering only valid
/// targets is the caller's job. [`Session::jump_to`](crate::Session::jump_to)
/// reports the same condition as an error instead.
#[instrument(skip(history), fields(len = history.len()))]
pub fn jump_to(history: &History, target: usize) -> usize {
    assert!(
        target < history.len(),
        "jump target {} out of range for history of length {}",
        target,
        history.len()
    );
    target
}

/// Describes a history entry: `"game start"` or `"move #n"`.
pub fn describe_move(move_index: usize) -> String {
    if move_index == 0 {
        "game start".to_string()
    } else {
        format!("move #{}", move_index)
    }
}
