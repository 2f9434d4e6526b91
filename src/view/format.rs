use crate::client::{CreatedAt, Link};

/// Placeholder shown when a page has no links
pub const NO_DATA: &str = "No data";

/// Cell text for absent values
pub const EMPTY_CELL: &str = "-";

/// Display layout for creation timestamps
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// `YYYY/MM/DD HH:MM:SS`; `-` when empty, the raw string when unparseable.
pub fn format_created_at(link: &Link) -> String {
    if link.created_at.trim().is_empty() {
        return EMPTY_CELL.to_string();
    }
    match link.created_at() {
        Some(CreatedAt::Zoned(dt)) => dt.format(DISPLAY_TIMESTAMP_FORMAT).to_string(),
        Some(CreatedAt::Naive(dt)) => dt.format(DISPLAY_TIMESTAMP_FORMAT).to_string(),
        None => link.created_at.clone(),
    }
}

pub fn title_or_dash(title: &str) -> String {
    if title.trim().is_empty() {
        EMPTY_CELL.to_string()
    } else {
        title.to_string()
    }
}

/// Cut to at most `max` characters, marking the cut with `...`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
