//! Move list with sort toggle.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Renders the sort toggle and the list of history entries.
pub fn render_moves(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let toggle = Paragraph::new(format!("[s] {}", app.sort().toggle_label()))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, chunks[0]);

    let moves = app.visible_moves();
    let items: Vec<ListItem> = moves
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(entry.label(), style))
        })
        .collect();

    let border_style = if app.focus() == Focus::Moves {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .title("Moves")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() == Focus::Moves {
        state.select(moves.iter().position(|m| *m.index() == app.selected()));
    }
    frame.render_stateful_widget(list, chunks[1], &mut state);
}
