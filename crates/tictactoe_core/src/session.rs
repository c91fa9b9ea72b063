//! A single game: history plus the cursor selecting the displayed snapshot.

use crate::history::{History, HistoryError, MoveError, describe_move};
use crate::rules::{WinResult, evaluate};
use crate::status::GameStatus;
use crate::types::{Player, Snapshot};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// One game of tic-tac-toe with time travel.
///
/// The session owns the [`History`] and the cursor. Everything else
/// (player to move, winner, status) is derived on demand from the
/// snapshot under the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    history: History,
    cursor: usize,
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    index: usize,
    /// `"game start"` or `"move #n"`.
    description: String,
    /// Whether the cursor currently selects this entry.
    is_current: bool,
}

impl MoveEntry {
    /// Text shown for this entry in a move list.
    pub fn label(&self) -> String {
        if self.is_current {
            format!("You are at move #{}", self.index)
        } else {
            format!("Go to {}", self.description)
        }
    }
}

impl Session {
    /// Starts a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new game session");
        Self::default()
    }

    /// Builds a session by playing `cells` in order from game start.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut session = Self::default();
        for &cell in cells {
            session.play_move(cell)?;
        }
        Ok(session)
    }

    /// Returns the full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the snapshot under the cursor.
    pub fn current(&self) -> &Snapshot {
        // The cursor only ever takes values checked against the history.
        &self.history.snapshots()[self.cursor]
    }

    /// Player whose turn it is at the cursor.
    pub fn next_player(&self) -> Player {
        Player::for_turn(self.cursor)
    }

    /// Completed line on the displayed snapshot, if any.
    pub fn winner(&self) -> Option<WinResult> {
        evaluate(self.current())
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> GameStatus {
        GameStatus::derive(self.current(), self.cursor)
    }

    /// Whether the cursor selects the most recent snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.cursor == self.history.last_cursor()
    }

    /// Plays `cell` for the player on turn.
    ///
    /// Moving from an earlier cursor discards the later snapshots.
    ///
    /// # Errors
    ///
    /// Returns why the move was refused; the session is unchanged.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play_move(&mut self, cell: usize) -> Result<(), MoveError> {
        self.cursor = self.history.record(self.cursor, cell)?;
        debug!(status = %self.status(), "Move applied");
        Ok(())
    }

    /// Moves the cursor to `target` without changing the history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if `target` does not select a
    /// snapshot; the cursor is unchanged.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, target: usize) -> Result<(), HistoryError> {
        if target >= self.history.len() {
            return Err(HistoryError::OutOfRange {
                target,
                len: self.history.len(),
            });
        }
        self.cursor = target;
        debug!("Cursor moved");
        Ok(())
    }

    /// Move list entries in history order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|index| MoveEntry {
                index,
                description: describe_move(index),
                is_current: index == self.cursor,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::new();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.next_player(), Player::X);
        assert!(session.is_at_latest());
    }

    #[test]
    fn test_jump_out_of_range_leaves_cursor() {
        let mut session = Session::replay(&[4]).unwrap();
        assert_eq!(
            session.jump_to(2),
            Err(HistoryError::OutOfRange { target: 2, len: 2 })
        );
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn test_move_labels() {
        let mut session = Session::replay(&[4, 0]).unwrap();
        session.jump_to(1).unwrap();
        let labels: Vec<String> = session.moves().iter().map(MoveEntry::label).collect();
        assert_eq!(
            labels,
            vec!["Go to game start", "You are at move #1", "Go to move #2"]
        );
    }

    #[test]
    fn test_replay_stops_at_first_rejection() {
        assert_eq!(
            Session::replay(&[4, 4]),
            Err(MoveError::CellOccupied(4))
        );
    }
}
