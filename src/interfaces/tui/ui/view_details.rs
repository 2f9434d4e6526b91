use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};
use crate::view::{LinkRow, NoticeLevel};

fn label(text: &str) -> Span<'_> {
    Span::styled(text, Style::default().fg(colors::WARNING).bold())
}

/// Details come from the fetched link once it arrives; until then the
/// table row stands in.
pub fn draw_view_details_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(code) = app.viewing_code.as_deref() else {
        return;
    };

    let inner_area = Popup::new("Link Details", popup::VIEW_DETAILS).render(frame, area);

    let fetched = app.manager.detail().filter(|link| link.code == code);
    let row = match fetched {
        Some(link) => Some(LinkRow::from(link)),
        None => app.rows().iter().find(|row| row.code == code).cloned(),
    };

    let mut details = vec![Line::from("")];
    match row {
        Some(row) => {
            details.extend([
                Line::from(vec![
                    label("Short Code:  "),
                    Span::styled(row.code, Style::default().fg(colors::PRIMARY).bold()),
                ]),
                Line::from(""),
                Line::from(vec![
                    label("Short URL:   "),
                    Span::styled(row.short_url, Style::default().fg(colors::SUCCESS)),
                ]),
                Line::from(""),
                Line::from(label("Target URL:  ")),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(row.original_url, Style::default().fg(Color::Blue)),
                ]),
                Line::from(""),
                Line::from(vec![label("Title:       "), Span::raw(row.title)]),
                Line::from(""),
                Line::from(vec![
                    label("Click Count: "),
                    Span::styled(
                        row.clicks.to_string(),
                        Style::default().fg(colors::SUCCESS).bold(),
                    ),
                ]),
                Line::from(""),
                Line::from(vec![label("Created At:  "), Span::raw(row.created_at)]),
            ]);
        }
        None => details.push(Line::from(Span::styled(
            code.to_string(),
            Style::default().fg(colors::PRIMARY).bold(),
        ))),
    }

    details.push(Line::from(""));
    if fetched.is_none() {
        let failed = app
            .notice
            .as_ref()
            .filter(|n| n.level == NoticeLevel::Error && n.message.contains(code));
        match failed {
            Some(notice) => details.push(Line::from(Span::styled(
                notice.message.clone(),
                Style::default().fg(colors::ERROR),
            ))),
            None => details.push(Line::from(Span::styled(
                "Loading...",
                Style::default().fg(colors::MUTED),
            ))),
        }
    }
    details.push(Line::from(""));
    details.push(Line::from(Span::styled(
        "Press [y] to copy, [q] or [Esc] to close",
        Style::default().fg(colors::MUTED),
    )));

    let details_para = Paragraph::new(details)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    frame.render_widget(details_para, inner_area);
}
