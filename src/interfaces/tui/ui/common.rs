use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::colors;
use crate::view::NoticeLevel;

/// Draw title bar with version and statistics
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("linkdeck", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors::MUTED),
        ),
        Span::styled("| ", Style::default().fg(colors::MUTED)),
    ];

    match app.manager.stats() {
        Some(stats) => {
            spans.push(Span::styled(
                format!("Links: {} ", stats.total_links),
                Style::default().fg(colors::WARNING),
            ));
            spans.push(Span::styled(
                format!("Clicks: {} ", stats.total_clicks),
                Style::default().fg(colors::SUCCESS),
            ));
            spans.push(Span::styled(
                format!("Today: {} ", stats.today_clicks),
                Style::default().fg(colors::PRIMARY),
            ));
        }
        None => spans.push(Span::styled(
            format!("Total: {} ", app.manager.total()),
            Style::default().fg(colors::WARNING),
        )),
    }

    if app.manager.stats_error().is_some() {
        spans.push(Span::styled(
            "(stats unavailable)",
            Style::default().fg(colors::ERROR),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.page_input.is_empty() {
        (
            format!("Go to page: {}_  (Enter to jump)", app.page_input),
            Style::default().fg(colors::WARNING).bold(),
        )
    } else if let Some(notice) = &app.notice {
        match notice.level {
            NoticeLevel::Error => (
                format!("[ERROR] {}", notice.message),
                Style::default().fg(Color::White).bg(colors::ERROR).bold(),
            ),
            NoticeLevel::Success => (
                format!("[SUCCESS] {}", notice.message),
                Style::default().fg(Color::Black).bg(colors::SUCCESS).bold(),
            ),
            NoticeLevel::Info => (notice.message.clone(), Style::default().fg(colors::PRIMARY)),
        }
    } else if app.manager.table().is_loading() {
        ("Loading...".to_string(), Style::default().fg(colors::MUTED))
    } else {
        ("Ready".to_string(), Style::default().fg(colors::PRIMARY))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = if app.inline_search_mode {
        vec![
            ("Enter", "Search", colors::SUCCESS),
            ("Esc", "Cancel", colors::ERROR),
        ]
    } else {
        match app.current_screen {
            CurrentScreen::Main => vec![
                ("Up/Down", "Navigate", colors::PRIMARY),
                ("Left/Right", "Page", colors::PRIMARY),
                ("/", "Search", colors::PRIMARY),
                ("v", "View", colors::PRIMARY),
                ("a", "Add", colors::SUCCESS),
                ("d", "Delete", colors::ERROR),
                ("r", "Refresh", colors::WARNING),
                ("?", "Help", Color::Blue),
                ("q", "Quit", Color::Magenta),
            ],
            CurrentScreen::AddLink => vec![
                ("Tab", "Switch Field", colors::PRIMARY),
                ("Enter", "Save", colors::SUCCESS),
                ("Esc", "Cancel", colors::ERROR),
            ],
            CurrentScreen::DeleteConfirm | CurrentScreen::Exiting => {
                vec![("y", "Yes", colors::SUCCESS), ("n", "No", colors::ERROR)]
            }
            CurrentScreen::ViewDetails => vec![
                ("y", "Copy URL", colors::SUCCESS),
                ("q/Esc", "Close", colors::ERROR),
            ],
            CurrentScreen::Help => vec![("q/Esc", "Close", colors::ERROR)],
        }
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
