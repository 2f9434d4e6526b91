use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::{App, EditingField};
use crate::interfaces::tui::constants::{colors, popup};

pub fn draw_add_link_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let inner_area = Popup::new("Add New Short Link", popup::ADD_LINK)
        .theme_color(colors::SUCCESS)
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Target URL + error
            Constraint::Length(3), // Title
            Constraint::Length(3), // Short code
            Constraint::Length(2), // Hint
        ])
        .split(inner_area);

    let form = &app.form;
    let editing = form.currently_editing;

    InputField::new("Target URL", &form.url)
        .active(editing == Some(EditingField::Url))
        .required()
        .error(form.url_error.as_deref())
        .render(frame, chunks[0]);

    InputField::new("Title", &form.title)
        .active(editing == Some(EditingField::Title))
        .placeholder("optional")
        .render(frame, chunks[1]);

    InputField::new("Short Code", &form.code)
        .active(editing == Some(EditingField::Code))
        .placeholder("empty = generated")
        .render(frame, chunks[2]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(" next field  ", Style::default().fg(colors::MUTED)),
        Span::styled("Enter", Style::default().fg(colors::SUCCESS).bold()),
        Span::styled(" create  ", Style::default().fg(colors::MUTED)),
        Span::styled("Esc", Style::default().fg(colors::ERROR).bold()),
        Span::styled(" cancel", Style::default().fg(colors::MUTED)),
    ]));
    frame.render_widget(hint, chunks[3]);
}
