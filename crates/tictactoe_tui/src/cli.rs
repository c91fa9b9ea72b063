//! Command-line interface for tictactoe.

use crate::config::SortOrder;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, global = true, default_value = "timetravel.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Cell indices (0-8) to play before handing over, comma-separated
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Initial move-list order, overriding the settings file
        #[arg(long, value_enum)]
        sort: Option<SortOrder>,
    },

    /// Play a sequence of cells and print every snapshot
    Replay {
        /// Cell indices (0-8) in play order, comma-separated
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,
    },
}

impl Cli {
    /// The command to run, falling back to an empty `play`.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play {
            moves: Vec::new(),
            sort: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.config, PathBuf::from("timetravel.toml"));
        assert_eq!(
            cli.command(),
            Command::Play {
                moves: Vec::new(),
                sort: None
            }
        );
    }

    #[test]
    fn test_parse_play_with_moves_and_sort() {
        let cli = Cli::parse_from(["tictactoe", "play", "--moves", "0,4,8", "--sort", "descending"]);
        assert_eq!(
            cli.command(),
            Command::Play {
                moves: vec![0, 4, 8],
                sort: Some(SortOrder::Descending)
            }
        );
    }

    #[test]
    fn test_replay_requires_moves() {
        assert!(Cli::try_parse_from(["tictactoe", "replay"]).is_err());
        let cli = Cli::try_parse_from(["tictactoe", "replay", "--moves", "4", "-c", "x.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert_eq!(cli.command(), Command::Replay { moves: vec![4] });
    }
}
