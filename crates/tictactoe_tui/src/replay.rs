//! Headless replay: play a list of cells and print each snapshot.

use anyhow::Result;
use std::io::Write;
use tictactoe_core::{Position, Session, describe_move};
use tracing::{info, instrument, warn};

/// Plays `cells` from game start, writing every snapshot to `out`.
///
/// Refused moves are reported and skipped, matching how the board
/// ignores them interactively.
#[instrument(skip(out))]
pub fn run_replay(cells: &[usize], out: &mut impl Write) -> Result<Session> {
    let mut session = Session::new();
    write_snapshot(out, &session, None)?;

    for &cell in cells {
        let player = session.next_player();
        match session.play_move(cell) {
            Ok(()) => {
                let played = Position::from_index(cell).map(|pos| format!("{} plays {}", player, pos));
                write_snapshot(out, &session, played.as_deref())?;
            }
            Err(e) => {
                warn!(cell, error = %e, "Skipping refused move");
                writeln!(out, "ignored cell {}: {}", cell, e)?;
                writeln!(out)?;
            }
        }
    }

    info!(status = %session.status(), "Replay finished");
    Ok(session)
}

fn write_snapshot(out: &mut impl Write, session: &Session, played: Option<&str>) -> Result<()> {
    match played {
        Some(played) => writeln!(out, "{}: {}", describe_move(session.cursor()), played)?,
        None => writeln!(out, "{}", describe_move(session.cursor()))?,
    }
    writeln!(out, "{}", session.current())?;
    writeln!(out, "{}", session.status())?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_prints_each_snapshot() {
        let mut out = Vec::new();
        let session = run_replay(&[4, 0], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(session.history().len(), 3);
        assert!(text.starts_with("game start\n1|2|3"));
        assert!(text.contains("move #1: X plays Center"));
        assert!(text.contains("move #2: O plays Top-left"));
        assert!(text.contains("Next player: X"));
    }

    #[test]
    fn test_replay_skips_refused_moves() {
        let mut out = Vec::new();
        let session = run_replay(&[0, 4, 1, 5, 2, 6], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(session.history().len(), 6);
        assert!(text.contains("Winner: X"));
        assert!(text.contains("ignored cell 6: Game is already won by X"));
    }
}
