use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::game::PrimaryAction;
use crate::tui::state::{AppState, Tab};

/// Render the bottom status bar: open prompt or contextual key hints on the
/// left, wall clock on the right.
pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let accent = Style::default().fg(state.config.theme.accent_fg);
    let hint = Style::default().fg(Color::DarkGray);

    let mut spans: Vec<Span> = Vec::new();

    if let Some(status) = &state.ui.status {
        let style = if status.is_error {
            Style::default().fg(Color::Red)
        } else {
            hint
        };
        spans.push(Span::styled(status.text.clone(), style));
    } else if state.ui.confirm_quit {
        spans.push(Span::styled(
            "Half in progress - really quit? y/n",
            accent,
        ));
    } else if state.game.reset_pending() {
        spans.push(Span::styled(
            "Reset match and clear the log? y/n",
            accent,
        ));
    } else {
        for (key, label) in hints(state) {
            if !spans.is_empty() {
                spans.push(Span::styled(" │ ", hint));
            }
            spans.push(Span::styled(format!("{} ", key), accent));
            spans.push(Span::styled(label, hint));
        }
    }

    // Wall clock on the right.
    let now = chrono::Local::now().format(&state.config.time_format).to_string();
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width as usize).saturating_sub(used + now.len() + 1);
    if padding > 0 {
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(now, hint));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    match state.ui.tab {
        Tab::Roster => vec![
            ("↑/↓", "Select"),
            ("a", "Add"),
            ("d", "Delete"),
            ("Tab", "Match"),
            ("q", "Quit"),
        ],
        Tab::Match => {
            let mut hints = Vec::new();
            match state.game.primary_action() {
                Some(PrimaryAction::Start) => hints.push(("Space", "Kick off")),
                Some(PrimaryAction::Reset) => hints.push(("Space", "New match")),
                None => {
                    hints.push(("g", "Goal us"));
                    hints.push(("t", "Goal them"));
                }
            }
            if state.credit_prompt_open() {
                hints.push(("1-9", "Credit"));
                hints.push(("0", "Skip"));
            }
            if state.game.can_undo() {
                hints.push(("u", "Undo"));
            }
            if state.game.phase() != crate::game::GamePhase::Start {
                hints.push(("r", "Reset"));
            }
            hints.push(("Tab", "Roster"));
            hints.push(("q", "Quit"));
            hints
        }
    }
}
