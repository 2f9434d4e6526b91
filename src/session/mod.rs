//! Client session state
//!
//! Everything the link list depends on between user actions lives in an
//! explicit [`Session`] value owned by the manager, not in globals.

mod sequencer;
mod token_store;

pub use sequencer::{RequestSequencer, Ticket};
pub use token_store::{ResolvedToken, TOKEN_KEY, TokenSource, TokenStore, resolve_token};

/// Rows per page requested from the service
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Which listing the table shows.
///
/// Exactly one mode is active; a search query is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListMode {
    #[default]
    Browse,
    Search(String),
}

impl ListMode {
    /// Trimmed query → `Search`, blank → `Browse`
    pub fn from_query(raw: &str) -> Self {
        let query = raw.trim();
        if query.is_empty() {
            ListMode::Browse
        } else {
            ListMode::Search(query.to_string())
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, ListMode::Search(_))
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            ListMode::Browse => None,
            ListMode::Search(q) => Some(q),
        }
    }
}

/// Parameters of one list/search fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub mode: ListMode,
}

#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    current_page: u32,
    limit: u32,
    mode: ListMode,
}

impl Session {
    pub fn new(token: impl Into<String>, limit: u32) -> Self {
        Self {
            token: token.into(),
            current_page: 1,
            limit: limit.max(1),
            mode: ListMode::Browse,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn mode(&self) -> &ListMode {
        &self.mode
    }

    /// Record the page about to be shown and build its query. Page 0 is
    /// treated as 1.
    pub fn goto_page(&mut self, page: u32) -> ListQuery {
        self.current_page = page.max(1);
        ListQuery {
            page: self.current_page,
            limit: self.limit,
            mode: self.mode.clone(),
        }
    }

    /// Switch mode from raw search input and reset to the first page
    pub fn apply_search(&mut self, raw: &str) -> ListQuery {
        self.mode = ListMode::from_query(raw);
        self.goto_page(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_browses_first_page() {
        let session = Session::new("tok", DEFAULT_PAGE_LIMIT);
        assert_eq!(session.current_page(), 1);
        assert_eq!(session.limit(), 20);
        assert_eq!(session.mode(), &ListMode::Browse);
        assert_eq!(session.token(), "tok");
    }

    #[test]
    fn test_from_query_trims() {
        assert_eq!(
            ListMode::from_query("  rust  "),
            ListMode::Search("rust".into())
        );
        assert_eq!(ListMode::from_query("   "), ListMode::Browse);
        assert_eq!(ListMode::from_query(""), ListMode::Browse);
    }

    #[test]
    fn test_apply_search_resets_page() {
        let mut session = Session::new("tok", 20);
        session.goto_page(4);
        let query = session.apply_search("docs");
        assert_eq!(query.page, 1);
        assert_eq!(query.mode.query(), Some("docs"));
        assert!(session.mode().is_search());
    }

    #[test]
    fn test_empty_search_returns_to_browse() {
        let mut session = Session::new("tok", 20);
        session.apply_search("docs");
        let query = session.apply_search("  ");
        assert_eq!(query.mode, ListMode::Browse);
        assert_eq!(session.mode(), &ListMode::Browse);
    }

    #[test]
    fn test_goto_page_zero_clamps() {
        let mut session = Session::new("tok", 20);
        assert_eq!(session.goto_page(0).page, 1);
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn test_zero_limit_clamps() {
        assert_eq!(Session::new("tok", 0).limit(), 1);
    }
}
