use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::state::AppState;

/// Render the Roster tab: the player list plus the name-entry line while a
/// player is being added.
pub fn render_roster(f: &mut Frame, area: Rect, state: &AppState) {
    let entry_open = state.ui.name_entry.is_some();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(if entry_open { 3 } else { 0 }),
        ])
        .split(area);

    render_player_list(f, chunks[0], state);
    if let Some(entry) = &state.ui.name_entry {
        render_name_entry(f, chunks[1], state, entry);
    }
}

fn render_player_list(f: &mut Frame, area: Rect, state: &AppState) {
    let accent = state.config.theme.accent_fg;

    if state.roster.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No players yet - press 'a' to add one.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Without a roster, goals are recorded without credit.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().borders(Borders::NONE));
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = state
        .roster
        .iter()
        .map(|player| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3}  ", player.id),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(player.name.clone()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::NONE))
        .highlight_style(
            Style::default()
                .fg(accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.ui.roster_selected.min(state.roster.len() - 1)));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_name_entry(f: &mut Frame, area: Rect, state: &AppState, entry: &str) {
    let accent = Style::default().fg(state.config.theme.accent_fg);
    let paragraph = Paragraph::new(Line::from(vec![
        Span::raw(entry.to_string()),
        Span::styled("█", accent),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(accent)
            .title(" New player (Enter saves, Esc cancels) "),
    );
    f.render_widget(paragraph, area);
}
