mod match_view;
mod roster_view;
mod status_bar;
mod tab_bar;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use super::state::{AppState, Tab};

/// Render one frame from the current state.
pub fn draw(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar
            Constraint::Min(0),    // content
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    tab_bar::render_tab_bar(f, chunks[0], state.ui.tab);

    match state.ui.tab {
        Tab::Match => match_view::render_match(f, chunks[1], state),
        Tab::Roster => roster_view::render_roster(f, chunks[1], state),
    }

    status_bar::render_status_bar(f, chunks[2], state);
}
