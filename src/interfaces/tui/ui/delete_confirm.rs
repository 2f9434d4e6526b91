use ratatui::{
    Frame,
    layout::{Alignment, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{URL_TRUNCATE_LENGTH, colors, popup};
use crate::view::truncate;

pub fn draw_delete_confirm_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(code) = app.pending_delete.as_deref() else {
        return;
    };

    let inner_area = Popup::new("Confirm Delete", popup::DELETE_CONFIRM)
        .theme_color(colors::ERROR)
        .margin(Margin::new(2, 2))
        .render(frame, area);

    let target = app
        .rows()
        .iter()
        .find(|row| row.code == code)
        .map(|row| truncate(&row.original_url, URL_TRUNCATE_LENGTH))
        .unwrap_or_default();

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "WARNING: Are you sure you want to delete this link?",
            Style::default().fg(colors::WARNING).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Code: ", Style::default().fg(colors::MUTED)),
            Span::styled(code, Style::default().fg(colors::PRIMARY).bold()),
        ]),
        Line::from(vec![
            Span::styled("URL: ", Style::default().fg(colors::MUTED)),
            Span::styled(target, Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "This action cannot be undone!",
            Style::default().fg(colors::ERROR).bold(),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner_area);
}
