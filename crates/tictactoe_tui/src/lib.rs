//! Terminal front-end for time-travel tic-tac-toe.
//!
//! Renders a [`tictactoe_core::Session`] with `ratatui` and maps key presses
//! onto its operations. The move list, its sort order and the board cursor
//! are view state held in [`App`]; the game itself lives in the core crate.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod replay;
mod tui;
mod ui;

pub use app::{App, Control, Focus};
pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings, SortOrder};
pub use input::{digit_cell, move_cursor};
pub use logging::{init_file_tracing, init_stderr_tracing};
pub use replay::run_replay;
pub use tui::run_tui;
pub use ui::draw;
