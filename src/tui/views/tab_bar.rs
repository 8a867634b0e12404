use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::state::Tab;

/// Render the top tab bar.
pub fn render_tab_bar(f: &mut Frame, area: Rect, current_tab: Tab) {
    let tabs = [Tab::Match, Tab::Roster];

    let mut spans = vec![Span::raw(" ")];
    for (i, tab) in tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }
        let style = if *tab == current_tab {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(tab.label(), style));
    }
    spans.push(Span::styled(
        "   (Tab switches)",
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(paragraph, area);
}
