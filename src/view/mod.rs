//! View models
//!
//! Pure functions turning API data into what the front ends draw. The CLI
//! prints these, the TUI turns them into ratatui widgets.

mod format;

pub use format::{
    DISPLAY_TIMESTAMP_FORMAT, EMPTY_CELL, NO_DATA, format_created_at, title_or_dash, truncate,
};

use crate::client::{Link, Stats};

/// One rendered table row. `code` doubles as the delete target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRow {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
    pub title: String,
    pub clicks: u64,
    pub created_at: String,
}

impl From<&Link> for LinkRow {
    fn from(link: &Link) -> Self {
        Self {
            code: link.code.clone(),
            short_url: link.display_short_url().to_string(),
            original_url: link.original_url.clone(),
            title: title_or_dash(&link.title),
            clicks: link.click_count,
            created_at: format_created_at(link),
        }
    }
}

/// State of the link table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableView {
    #[default]
    Loading,
    /// Fetched, but the page holds no links
    Empty,
    Rows(Vec<LinkRow>),
    /// Inline error text replacing the rows
    Error(String),
}

impl TableView {
    pub fn rows(&self) -> &[LinkRow] {
        match self {
            TableView::Rows(rows) => rows,
            _ => &[],
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows().len()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, TableView::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            TableView::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub page: u32,
    pub active: bool,
}

/// Most page controls ever rendered at once
pub const MAX_PAGE_CONTROLS: u32 = 9;

/// Page controls, windowed around the active page when there are more than
/// [`MAX_PAGE_CONTROLS`] pages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaginationView {
    pub controls: Vec<PageControl>,
    total_pages: u32,
}

impl PaginationView {
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Pages before the first control are hidden
    pub fn clipped_start(&self) -> bool {
        self.controls.first().is_some_and(|c| c.page > 1)
    }

    /// Pages after the last control are hidden
    pub fn clipped_end(&self) -> bool {
        self.controls
            .last()
            .is_some_and(|c| c.page < self.total_pages)
    }

    pub fn active_page(&self) -> Option<u32> {
        self.controls.iter().find(|c| c.active).map(|c| c.page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatsView {
    pub total_links: u64,
    pub total_clicks: u64,
    pub today_clicks: u64,
    pub top_links: Vec<LinkRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// Transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Rows in server order, or [`TableView::Empty`] for an empty page
pub fn render_links(links: &[Link]) -> TableView {
    if links.is_empty() {
        return TableView::Empty;
    }
    TableView::Rows(links.iter().map(LinkRow::from).collect())
}

/// Controls for `1..=total_pages` with `page` active; none for a single
/// page. At most [`MAX_PAGE_CONTROLS`] are built, centred on `page`.
pub fn render_pagination(page: u32, total_pages: u32) -> PaginationView {
    if total_pages <= 1 {
        return PaginationView::default();
    }

    let (first, last) = if total_pages <= MAX_PAGE_CONTROLS {
        (1, total_pages)
    } else {
        let first = page
            .saturating_sub(MAX_PAGE_CONTROLS / 2)
            .clamp(1, total_pages - MAX_PAGE_CONTROLS + 1);
        (first, first + MAX_PAGE_CONTROLS - 1)
    };

    PaginationView {
        controls: (first..=last)
            .map(|p| PageControl {
                page: p,
                active: p == page,
            })
            .collect(),
        total_pages,
    }
}

pub fn render_stats(stats: &Stats) -> StatsView {
    StatsView {
        total_links: stats.total_links,
        total_clicks: stats.total_clicks,
        today_clicks: stats.today_clicks,
        top_links: stats.top_links.iter().map(LinkRow::from).collect(),
    }
}
