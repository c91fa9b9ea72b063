//! Tic-tac-toe with time travel - CLI entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_core::Session;
use tictactoe_tui::{
    App, Cli, Command, Settings, init_file_tracing, init_stderr_tracing, run_replay, run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)?;

    match cli.command() {
        Command::Play { moves, sort } => {
            init_file_tracing(&settings)?;
            let sort = sort.unwrap_or(*settings.sort());
            let session = Session::replay(&moves).context("Invalid --moves sequence")?;
            info!(moves = moves.len(), %sort, "Starting game");
            run_tui(App::new(session, sort))
        }
        Command::Replay { moves } => {
            init_stderr_tracing(&settings);
            let mut stdout = std::io::stdout().lock();
            run_replay(&moves, &mut stdout)?;
            Ok(())
        }
    }
}
