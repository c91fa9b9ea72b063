//! Tic-tac-toe rules with a time-travel move history.
//!
//! The crate holds the game logic only; rendering and input live in the
//! caller, which drives a [`Session`] through a handful of operations.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] finds a completed line on a [`Board`]
//! - **History**: [`History`] stores snapshots with branch-and-overwrite
//!   semantics; [`play_move`] and [`jump_to`] are its functional interface
//! - **Session**: [`Session`] owns a history and its cursor and derives the
//!   [`GameStatus`] from them
//! - **Invariants**: properties every history satisfies, checked in debug
//!   builds
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameStatus, Player, Session};
//!
//! let mut session = Session::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     session.play_move(cell).unwrap();
//! }
//! assert_eq!(session.status(), GameStatus::Won(Player::X));
//! assert_eq!(session.status().to_string(), "Winner: X");
//!
//! // Travel back and branch off.
//! session.jump_to(2).unwrap();
//! session.play_move(8).unwrap();
//! assert_eq!(session.history().len(), 4);
//! ```

#![warn(missing_docs)]

mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod status;
mod types;

pub use history::{History, HistoryError, MoveError, describe_move, jump_to, play_move};
pub use position::Position;
pub use rules::{LINES, WinResult, evaluate, is_draw, is_full};
pub use session::{MoveEntry, Session};
pub use status::GameStatus;
pub use types::{Board, BoardParseError, CELL_COUNT, Cell, Player, Snapshot};
