//! Application state and key handling.

use crate::config::SortOrder;
use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_core::{MoveEntry, Position, Session};
use tracing::{debug, info, instrument};

/// Which pane receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// Owns the game session plus the view state the core does not know
/// about: board cursor, focus, move-list selection and sort order.
#[derive(Debug, Clone)]
pub struct App {
    session: Session,
    cursor: Position,
    focus: Focus,
    selected: usize,
    sort: SortOrder,
}

impl App {
    /// Creates an application around an existing session.
    #[instrument(skip(session), fields(moves = session.history().len() - 1))]
    pub fn new(session: Session, sort: SortOrder) -> Self {
        let selected = session.cursor();
        Self {
            session,
            cursor: Position::Center,
            focus: Focus::Board,
            selected,
            sort,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History index highlighted in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Current move-list order.
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Move list in display order.
    pub fn visible_moves(&self) -> Vec<MoveEntry> {
        let mut moves = self.session.moves();
        if self.sort == SortOrder::Descending {
            moves.reverse();
        }
        moves
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        if let Some(cell) = digit_cell(key) {
            self.play(cell);
            return Control::Continue;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('s') => self.toggle_sort(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor.to_index()),
                Focus::Moves => self.jump(self.selected),
            },
            KeyCode::Up | KeyCode::Down if self.focus == Focus::Moves => {
                self.step_selection(key == KeyCode::Down);
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
        Control::Continue
    }

    /// Plays `cell`; refused moves change nothing.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: usize) {
        match self.session.play_move(cell) {
            Ok(()) => {
                self.selected = self.session.cursor();
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
            }
            Err(e) => debug!(error = %e, "Ignoring move"),
        }
    }

    /// Jumps to history entry `target`.
    #[instrument(skip(self))]
    pub fn jump(&mut self, target: usize) {
        match self.session.jump_to(target) {
            Ok(()) => self.selected = target,
            Err(e) => debug!(error = %e, "Ignoring jump"),
        }
    }

    /// Reverses the move list order.
    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggle();
        debug!(sort = %self.sort, "Move list order changed");
    }

    /// Starts a new game, keeping view preferences.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.session = Session::new();
        self.selected = 0;
        self.cursor = Position::Center;
    }

    /// Moves the move-list highlight one row down (or up) on screen.
    fn step_selection(&mut self, down: bool) {
        let last = self.session.history().last_cursor();
        let forward = down == (self.sort == SortOrder::Ascending);
        self.selected = if forward {
            (self.selected + 1).min(last)
        } else {
            self.selected.saturating_sub(1)
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Session::new(), SortOrder::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{GameStatus, Player};

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = App::default();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session().current().occupied_count(), 1);
        assert!(!app.session().current().is_empty(Position::TopCenter.to_index()));
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_refused_move_changes_nothing() {
        let mut app = App::default();
        app.handle_key(KeyCode::Char('5'));
        let before = app.session().clone();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.session(), &before);
    }

    #[test]
    fn test_descending_reverses_visible_moves_only() {
        let mut app = App::new(Session::replay(&[0, 4]).unwrap(), SortOrder::Ascending);
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.sort(), SortOrder::Descending);

        let indices: Vec<usize> = app.visible_moves().iter().map(|m| *m.index()).collect();
        assert_eq!(indices, vec![2, 1, 0]);
        assert_eq!(app.session().cursor(), 2);
        assert_eq!(app.session().history().len(), 3);
    }

    #[test]
    fn test_selection_follows_screen_direction() {
        let mut app = App::new(Session::replay(&[0, 4]).unwrap(), SortOrder::Descending);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Moves);

        // Latest entry is on top when descending, so Down goes back in time.
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected(), 1);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected(), 0);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.session().cursor(), 0);
        assert_eq!(
            app.session().status(),
            GameStatus::InProgress { next: Player::X }
        );
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(Session::replay(&[0, 4, 8]).unwrap(), SortOrder::Descending);
        assert_eq!(app.handle_key(KeyCode::Char('r')), Control::Continue);
        assert_eq!(app.session().history().len(), 1);
        assert_eq!(app.sort(), SortOrder::Descending);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
    }
}
