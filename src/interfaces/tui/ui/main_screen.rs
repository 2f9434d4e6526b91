use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{TITLE_TRUNCATE_LENGTH, URL_TRUNCATE_LENGTH, colors};
use crate::view::{LinkRow, NO_DATA, PaginationView, TableView, truncate};

pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let pagination = app.manager.pagination();
    let (table_area, pager_area) = if pagination.is_empty() {
        (area, None)
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(1)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    };

    if let Some(pager_area) = pager_area {
        frame.render_widget(pagination_line(pagination), pager_area);
    }

    let title = list_title(app);
    if matches!(app.manager.table(), TableView::Rows(_)) {
        draw_link_table(frame, app, table_area, title);
        return;
    }

    match app.manager.table() {
        TableView::Rows(_) => {}
        TableView::Loading => draw_placeholder(
            frame,
            table_area,
            title,
            Span::styled("Loading...", Style::default().fg(colors::MUTED)),
        ),
        TableView::Empty => draw_placeholder(
            frame,
            table_area,
            title,
            Span::styled(
                NO_DATA,
                Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            ),
        ),
        TableView::Error(message) => draw_placeholder(
            frame,
            table_area,
            title,
            Span::styled(message.as_str(), Style::default().fg(colors::ERROR).bold()),
        ),
    }
}

fn list_title(app: &App) -> String {
    let mut title_parts = vec![];

    match app.manager.session().mode().query() {
        Some(query) => title_parts.push(format!(
            "Search: \"{}\" ({} found)",
            query,
            app.manager.total()
        )),
        None => title_parts.push(format!("Short Links ({})", app.manager.total())),
    }

    let total_pages = app.manager.total_pages();
    if total_pages > 1 {
        title_parts.push(format!(
            "Page {}/{}",
            app.manager.current_page(),
            total_pages
        ));
    }

    title_parts.join(" | ")
}

fn draw_placeholder(frame: &mut Frame, area: Rect, title: String, body: Span<'_>) {
    let text = vec![Line::from(""), Line::from(""), Line::from(body)];

    let placeholder = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors::MUTED))
                .title(title)
                .title_style(Style::default().fg(colors::PRIMARY)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(placeholder, area);
}

fn link_row(row: &LinkRow) -> Row<'static> {
    Row::new(vec![
        Span::styled(
            row.code.clone(),
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            truncate(&row.original_url, URL_TRUNCATE_LENGTH),
            Style::default().fg(Color::Blue),
        ),
        Span::raw(truncate(&row.title, TITLE_TRUNCATE_LENGTH)),
        Span::styled(row.clicks.to_string(), Style::default().fg(colors::SUCCESS)),
        Span::styled(row.created_at.clone(), Style::default().fg(colors::MUTED)),
    ])
}

fn draw_link_table(frame: &mut Frame, app: &mut App, area: Rect, title: String) {
    let header = Row::new(vec!["Code", "URL", "Title", "Clicks", "Created"])
        .style(
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = app.rows().iter().map(link_row).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(12), // Code
            Constraint::Min(20),    // URL
            Constraint::Length(16), // Title
            Constraint::Length(7),  // Clicks
            Constraint::Length(19), // Created
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(Style::default().bg(colors::MUTED).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

/// `1 2 [3] 4` with the active page highlighted
fn pagination_line(pagination: &PaginationView) -> Paragraph<'static> {
    let mut spans = vec![Span::styled("Pages: ", Style::default().fg(colors::MUTED))];
    if pagination.clipped_start() {
        spans.push(Span::styled("… ", Style::default().fg(colors::MUTED)));
    }
    for (i, control) in pagination.controls.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if control.active {
            spans.push(Span::styled(
                format!("[{}]", control.page),
                Style::default()
                    .fg(colors::HIGHLIGHT_FG)
                    .bg(colors::HIGHLIGHT_BG)
                    .bold(),
            ));
        } else {
            spans.push(Span::styled(
                control.page.to_string(),
                Style::default().fg(Color::White),
            ));
        }
    }
    if pagination.clipped_end() {
        spans.push(Span::styled(
            format!(" … {}", pagination.total_pages()),
            Style::default().fg(colors::MUTED),
        ));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::render_pagination;

    #[test]
    fn test_pagination_line_marks_active_page() {
        let line = pagination_line(&render_pagination(2, 3));
        let rendered = format!("{:?}", line);
        assert!(rendered.contains("[2]"));
        assert!(!rendered.contains("[1]"));
    }

    #[test]
    fn test_pagination_line_shows_clipped_total() {
        let line = pagination_line(&render_pagination(1, 1000));
        let rendered = format!("{:?}", line);
        assert!(rendered.contains("[1]"));
        assert!(rendered.contains("… 1000"));
    }
}
