//! Side panel for the highlighted row

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::colors;
use crate::view::LinkRow;

fn field<'a>(label: &'a str, value: Span<'a>) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(colors::MUTED)),
        value,
    ])
}

fn row_details(row: &LinkRow) -> Vec<Line<'_>> {
    vec![
        Line::from(""),
        field(
            "Code:      ",
            Span::styled(
                row.code.as_str(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ),
        Line::from(""),
        field(
            "Short URL: ",
            Span::styled(row.short_url.as_str(), Style::default().fg(colors::SUCCESS)),
        ),
        Line::from(""),
        Line::from(Span::styled("URL:", Style::default().fg(colors::MUTED))),
        Line::from(Span::styled(
            row.original_url.as_str(),
            Style::default().fg(Color::Blue),
        )),
        Line::from(""),
        field("Title:     ", Span::raw(row.title.as_str())),
        Line::from(""),
        field(
            "Clicks:    ",
            Span::styled(
                row.clicks.to_string(),
                Style::default()
                    .fg(colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
        ),
        Line::from(""),
        field("Created:   ", Span::raw(row.created_at.as_str())),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("Actions:", Style::default().fg(colors::MUTED))),
        Line::from(vec![
            Span::styled(" v ", Style::default().fg(colors::WARNING).bold()),
            Span::styled("Details", Style::default().fg(colors::MUTED)),
        ]),
        Line::from(vec![
            Span::styled(" y ", Style::default().fg(colors::WARNING).bold()),
            Span::styled("Copy short URL", Style::default().fg(colors::MUTED)),
        ]),
        Line::from(vec![
            Span::styled(" d ", Style::default().fg(colors::WARNING).bold()),
            Span::styled("Delete", Style::default().fg(colors::MUTED)),
        ]),
    ]
}

/// Draw the detail panel showing information about the selected link
pub fn draw_detail_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title("Details")
        .title_style(Style::default().fg(colors::PRIMARY).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::MUTED));

    let paragraph = match app.get_selected_row() {
        Some(row) => Paragraph::new(row_details(row))
            .block(block)
            .wrap(Wrap { trim: true }),
        None => Paragraph::new(vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "No link selected",
                Style::default().fg(colors::MUTED),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center),
    };

    frame.render_widget(paragraph, area);
}
