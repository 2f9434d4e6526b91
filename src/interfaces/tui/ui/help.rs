use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::{colors, popup};

const SECTIONS: &[(&str, &[(&str, &str, Color)])] = &[
    (
        "NAVIGATION",
        &[
            ("Up/Down, j/k", "Navigate list", colors::PRIMARY),
            ("Home, g", "Jump to top", colors::PRIMARY),
            ("End, G", "Jump to bottom", colors::PRIMARY),
            ("Left/Right, [/]", "Previous / next page", colors::PRIMARY),
            ("0-9 then Enter", "Go to page", colors::PRIMARY),
        ],
    ),
    (
        "ACTIONS",
        &[
            ("a", "Add new link", colors::SUCCESS),
            ("d", "Delete selected link", colors::ERROR),
            ("Enter, v", "View link details", colors::PRIMARY),
            ("y", "Copy short URL", colors::SUCCESS),
            ("r", "Reload page and stats", colors::WARNING),
        ],
    ),
    (
        "SEARCH",
        &[
            ("/", "Search (empty query lists all)", colors::PRIMARY),
            ("Esc", "Clear search", colors::ERROR),
        ],
    ),
    (
        "FORM EDITING",
        &[
            ("Tab / Shift-Tab", "Switch field", colors::PRIMARY),
            ("Enter", "Create", colors::SUCCESS),
            ("Esc", "Cancel", colors::ERROR),
        ],
    ),
    (
        "GENERAL",
        &[
            ("?, h", "Show this help", colors::PRIMARY),
            ("q", "Quit", Color::Magenta),
        ],
    ),
];

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    for (heading, keys) in SECTIONS {
        lines.push(Line::from(Span::styled(
            *heading,
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, desc, color) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<18}", key), Style::default().fg(*color)),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Press [q] or [Esc] to close",
        Style::default().fg(colors::MUTED),
    )));
    lines
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);
    frame.render_widget(
        Paragraph::new(help_lines()).alignment(Alignment::Left),
        inner_area,
    );
}
