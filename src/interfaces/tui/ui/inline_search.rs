//! Inline search bar component

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;

/// Draw the inline search bar
pub fn draw_inline_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let search_text = Line::from(vec![
        Span::styled(
            "/",
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(app.search_input.as_str(), Style::default().fg(Color::White)),
        Span::styled(
            "_",
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::RAPID_BLINK),
        ),
    ]);

    let title = match app.manager.session().mode().query() {
        Some(active) => format!("Search (current: \"{}\", empty clears)", active),
        None => "Search".to_string(),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(colors::PRIMARY))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::WARNING));

    frame.render_widget(Paragraph::new(search_text).block(block), area);
}
