use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::formatting::{format_clock, format_event_line, pad_to_width};
use crate::game::CreditAction;
use crate::tui::state::AppState;

/// Width reserved for one score box, teams side by side.
const SCORE_BOX_WIDTH: u16 = 24;

/// Render the Match tab: clock, score boxes, optional player-select strip
/// and the event history.
pub fn render_match(f: &mut Frame, area: Rect, state: &AppState) {
    let credit_open = state.credit_prompt_open();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // clock
            Constraint::Length(4), // scores
            Constraint::Length(if credit_open { 3 } else { 0 }),
            Constraint::Min(0), // history
        ])
        .split(area);

    render_clock(f, chunks[0], state);
    render_scores(f, chunks[1], state);
    if credit_open {
        render_player_select(f, chunks[2], state);
    }
    render_history(f, chunks[3], state);
}

fn render_clock(f: &mut Frame, area: Rect, state: &AppState) {
    let seconds = state.game.elapsed_at(Instant::now());
    let running = state.game.phase().is_in_progress();
    let clock_style = if running {
        Style::default()
            .fg(state.config.theme.clock_running_fg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(Span::styled(format_clock(seconds), clock_style)),
        Line::from(Span::styled(
            state.game.phase().label(),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(paragraph, area);
}

fn render_scores(f: &mut Frame, area: Rect, state: &AppState) {
    let (us, them) = state.game.score();
    let total = SCORE_BOX_WIDTH * 2 + 3;
    let left_pad = area.width.saturating_sub(total) / 2;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(left_pad),
            Constraint::Length(SCORE_BOX_WIDTH),
            Constraint::Length(3),
            Constraint::Length(SCORE_BOX_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

    render_score_box(
        f,
        chunks[1],
        &state.config.team_us,
        us,
        "g",
        state.config.theme.us_fg,
    );
    f.render_widget(
        Paragraph::new("\n:").alignment(Alignment::Center),
        chunks[2],
    );
    render_score_box(
        f,
        chunks[3],
        &state.config.team_them,
        them,
        "t",
        state.config.theme.them_fg,
    );
}

fn render_score_box(f: &mut Frame, area: Rect, label: &str, value: u32, key: &str, fg: Color) {
    let title = format!(" {} [{}] ", label, key);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(fg).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(fg))
            .title(title),
    );
    f.render_widget(paragraph, area);
}

fn render_player_select(f: &mut Frame, area: Rect, state: &AppState) {
    let title = match state.game.pending_credit() {
        Some(CreditAction::Goal) => " Scored by? ",
        Some(CreditAction::Assist) => " Assist by? ",
        None => return,
    };

    let accent = Style::default().fg(state.config.theme.accent_fg);
    let mut spans = Vec::new();
    // Digit keys cap the pickable roster at nine players.
    for (i, player) in state.roster.iter().take(9).enumerate() {
        spans.push(Span::styled(format!("{} ", i + 1), accent));
        spans.push(Span::raw(pad_to_width(&player.name, 10)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("0 ", accent));
    spans.push(Span::raw("skip"));

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(accent)
            .title(title),
    );
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().borders(Borders::TOP).title(" History ");
    let inner_height = block.inner(area).height as usize;

    let log = state.game.log();
    // Newest rows win the space; skip what does not fit.
    let skip = log.len().saturating_sub(inner_height);
    let items: Vec<ListItem> = log
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(index, event)| {
            let (time, text, score) = format_event_line(index, event, log, &state.roster);
            let mut spans = vec![
                Span::styled(time, Style::default().fg(Color::DarkGray)),
                Span::raw("  "),
                Span::raw(text),
            ];
            if let Some(score) = score {
                spans.push(Span::styled(
                    format!("  ({})", score),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}
