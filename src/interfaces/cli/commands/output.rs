//! Terminal rendering of the shared view models

use colored::Colorize;

use crate::view::{LinkRow, PaginationView, truncate};

const CODE_WIDTH: usize = 12;
const TITLE_WIDTH: usize = 24;
const URL_WIDTH: usize = 48;
const CLICKS_WIDTH: usize = 8;

pub fn print_rows(rows: &[LinkRow]) {
    println!(
        "  {:<cw$} {:<tw$} {:<uw$} {:>kw$}  {}",
        "Code".bold(),
        "Title".bold(),
        "URL".bold(),
        "Clicks".bold(),
        "Created".bold(),
        cw = CODE_WIDTH,
        tw = TITLE_WIDTH,
        uw = URL_WIDTH,
        kw = CLICKS_WIDTH,
    );
    for row in rows {
        println!(
            "  {} {} {} {}  {}",
            format!("{:<w$}", row.code, w = CODE_WIDTH).cyan(),
            format!("{:<w$}", truncate(&row.title, TITLE_WIDTH), w = TITLE_WIDTH),
            format!("{:<w$}", truncate(&row.original_url, URL_WIDTH), w = URL_WIDTH).blue(),
            format!("{:>w$}", row.clicks, w = CLICKS_WIDTH).green(),
            row.created_at.dimmed()
        );
    }
}

/// `Pages: 1 [2] 3`, nothing for a single page
pub fn pagination_line(view: &PaginationView) -> Option<String> {
    if view.is_empty() {
        return None;
    }
    let mut controls: Vec<String> = view
        .controls
        .iter()
        .map(|c| {
            if c.active {
                format!("[{}]", c.page).bold().yellow().to_string()
            } else {
                c.page.to_string()
            }
        })
        .collect();
    if view.clipped_start() {
        controls.insert(0, "…".to_string());
    }
    if view.clipped_end() {
        controls.push(format!("… {}", view.total_pages()));
    }
    Some(format!("Pages: {}", controls.join(" ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::render_pagination;

    #[test]
    fn test_pagination_line() {
        colored::control::set_override(false);
        assert_eq!(pagination_line(&render_pagination(1, 1)), None);
        assert_eq!(
            pagination_line(&render_pagination(2, 3)).as_deref(),
            Some("Pages: 1 [2] 3")
        );
        assert_eq!(
            pagination_line(&render_pagination(10, 40)).as_deref(),
            Some("Pages: … 6 7 8 9 [10] 11 12 13 14 … 40")
        );
    }
}
