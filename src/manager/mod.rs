//! Link list orchestration
//!
//! [`LinkManager`] owns the session and every view model. Each user action
//! maps to one operation; every remote failure is caught there, turned into
//! table text or a [`Notice`], and logged. Nothing here is fatal.
//!
//! Operations come in two shapes. The `async fn` forms (`load`, `create`, ...)
//! run start to finish and suit the CLI. The `begin_*`/`apply_*` pairs split
//! the network call out so the TUI can run it on a task while the event loop
//! keeps drawing.

mod requests;

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::client::{CreateLinkRequest, Link, LinkApi};
use crate::session::{ListMode, RequestSequencer, Session};
use crate::view::{
    Notice, PaginationView, StatsView, TableView, render_links, render_pagination, render_stats,
};

pub use requests::{
    CreateOutcome, CreateRequest, DeleteOutcome, DeleteRequest, DetailOutcome, DetailRequest,
    ListOutcome, ListRequest, StatsOutcome, StatsRequest,
};

/// Asks the user to approve a destructive action
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Approval obtained beforehand (`--yes`, or a dialog already answered)
#[derive(Debug, Clone, Copy, Default)]
pub struct Confirmed;

impl Confirm for Confirmed {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Raw input of the creation dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub url: String,
    pub title: String,
    pub code: String,
}

impl CreateForm {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }
}

/// Work left to do after a mutating call succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    None,
    Reload { page: u32, stats: bool },
}

pub struct LinkManager {
    api: Arc<dyn LinkApi>,
    session: Session,
    table: TableView,
    pagination: PaginationView,
    total: u64,
    total_pages: u32,
    stats: Option<StatsView>,
    stats_error: Option<String>,
    notice: Option<Notice>,
    detail: Option<Link>,
    create_dialog_open: bool,
    list_seq: RequestSequencer,
    stats_seq: RequestSequencer,
}

impl LinkManager {
    pub fn new(api: Arc<dyn LinkApi>, session: Session) -> Self {
        debug!("LinkManager using {} backend", api.name());
        Self {
            api,
            session,
            table: TableView::Loading,
            pagination: PaginationView::default(),
            total: 0,
            total_pages: 0,
            stats: None,
            stats_error: None,
            notice: None,
            detail: None,
            create_dialog_open: false,
            list_seq: RequestSequencer::new(),
            stats_seq: RequestSequencer::new(),
        }
    }

    // ============ accessors ============

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    pub fn pagination(&self) -> &PaginationView {
        &self.pagination
    }

    pub fn current_page(&self) -> u32 {
        self.session.current_page()
    }

    /// Total pages reported by the last successful fetch
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Total matching links reported by the last successful fetch
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn stats(&self) -> Option<&StatsView> {
        self.stats.as_ref()
    }

    /// Reason of the last failed stats refresh, cleared on success
    pub fn stats_error(&self) -> Option<&str> {
        self.stats_error.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn detail(&self) -> Option<&Link> {
        self.detail.as_ref()
    }

    pub fn clear_detail(&mut self) {
        self.detail = None;
    }

    pub fn is_create_dialog_open(&self) -> bool {
        self.create_dialog_open
    }

    pub fn open_create_dialog(&mut self) {
        self.create_dialog_open = true;
    }

    pub fn close_create_dialog(&mut self) {
        self.create_dialog_open = false;
    }

    // ============ load ============

    /// Start fetching `page` (0 means 1) in the current mode
    pub fn begin_load(&mut self, page: u32) -> ListRequest {
        let query = self.session.goto_page(page);
        self.table = TableView::Loading;
        let ticket = self.list_seq.issue();
        debug!(
            "Loading page {} ({:?}), ticket {}",
            query.page,
            query.mode,
            ticket.value()
        );
        ListRequest {
            api: Arc::clone(&self.api),
            token: self.session.token().to_string(),
            ticket,
            query,
        }
    }

    /// Apply a list result. Returns `false` when the result was stale and
    /// dropped.
    pub fn apply_load(&mut self, outcome: ListOutcome) -> bool {
        if !self.list_seq.is_current(outcome.ticket) {
            debug!(
                "Dropping stale list response for page {} (ticket {})",
                outcome.page,
                outcome.ticket.value()
            );
            return false;
        }

        match outcome.result {
            Ok(page) => {
                self.table = render_links(&page.links);
                self.pagination = render_pagination(page.page, page.total_pages);
                self.total = page.total;
                self.total_pages = page.total_pages;
                debug!(
                    "Loaded page {}/{} with {} links",
                    outcome.page,
                    page.total_pages,
                    page.links.len()
                );
            }
            Err(e) => {
                error!("Failed to load links (page {}): {}", outcome.page, e);
                self.table = TableView::Error(format!("Failed to load: {}", e));
                self.pagination = PaginationView::default();
            }
        }
        true
    }

    pub async fn load(&mut self, page: u32) {
        let request = self.begin_load(page);
        let outcome = request.execute().await;
        self.apply_load(outcome);
    }

    /// Re-fetch the page currently shown
    pub fn begin_reload(&mut self) -> ListRequest {
        self.begin_load(self.session.current_page())
    }

    // ============ search ============

    /// Switch mode from raw input without fetching anything
    pub fn set_query(&mut self, raw: &str) {
        self.session.apply_search(raw);
        match self.session.mode() {
            ListMode::Browse => debug!("Search cleared, back to browsing"),
            ListMode::Search(q) => info!("Searching for \"{}\"", q),
        }
    }

    /// Switch mode from raw input and start loading page 1
    pub fn begin_search(&mut self, raw: &str) -> ListRequest {
        self.set_query(raw);
        self.begin_load(1)
    }

    pub async fn search(&mut self, raw: &str) {
        let request = self.begin_search(raw);
        let outcome = request.execute().await;
        self.apply_load(outcome);
    }

    // ============ stats ============

    pub fn begin_stats(&mut self) -> StatsRequest {
        StatsRequest {
            api: Arc::clone(&self.api),
            token: self.session.token().to_string(),
            ticket: self.stats_seq.issue(),
        }
    }

    /// Apply a stats result. Failures keep the previous stats.
    pub fn apply_stats(&mut self, outcome: StatsOutcome) -> bool {
        if !self.stats_seq.is_current(outcome.ticket) {
            debug!(
                "Dropping stale stats response (ticket {})",
                outcome.ticket.value()
            );
            return false;
        }

        match outcome.result {
            Ok(stats) => {
                self.stats = Some(render_stats(&stats));
                self.stats_error = None;
            }
            Err(e) => {
                warn!("Failed to refresh stats: {}", e);
                self.stats_error = Some(e.to_string());
            }
        }
        true
    }

    pub async fn refresh_stats(&mut self) {
        let request = self.begin_stats();
        let outcome = request.execute().await;
        self.apply_stats(outcome);
    }

    // ============ create ============

    /// Validate the form. Only the URL is required; title and code go out
    /// as typed, an empty code is omitted.
    pub fn prepare_create(&mut self, form: CreateForm) -> Option<CreateRequest> {
        let url = form.url.trim();
        if url.is_empty() {
            self.notice = Some(Notice::error("URL is required"));
            return None;
        }

        let code = Some(form.code).filter(|c| !c.is_empty());
        Some(CreateRequest {
            api: Arc::clone(&self.api),
            token: self.session.token().to_string(),
            body: CreateLinkRequest {
                url: url.to_string(),
                title: form.title,
                code,
            },
        })
    }

    pub fn apply_create(&mut self, outcome: CreateOutcome) -> FollowUp {
        match outcome.result {
            Ok(created) => {
                info!("Created short link {} -> {}", created.code, created.original_url);
                self.create_dialog_open = false;
                self.notice = Some(Notice::success(format!("Created: {}", created.short_url)));
                FollowUp::Reload {
                    page: 1,
                    stats: true,
                }
            }
            Err(e) => {
                error!("Create failed: {:?}", e);
                self.notice = Some(Notice::error(format!("Create failed: {}", e)));
                FollowUp::None
            }
        }
    }

    pub async fn create(&mut self, form: CreateForm) -> FollowUp {
        let Some(request) = self.prepare_create(form) else {
            return FollowUp::None;
        };
        let outcome = request.execute().await;
        let follow_up = self.apply_create(outcome);
        self.follow_up(follow_up).await;
        follow_up
    }

    // ============ delete ============

    /// Ask for confirmation and build the delete call. `None` when declined.
    pub fn prepare_delete(&mut self, code: &str, confirm: &dyn Confirm) -> Option<DeleteRequest> {
        if !confirm.confirm(&format!("Delete short link \"{}\"?", code)) {
            debug!("Delete of {} declined", code);
            return None;
        }

        Some(DeleteRequest {
            api: Arc::clone(&self.api),
            token: self.session.token().to_string(),
            code: code.to_string(),
        })
    }

    pub fn apply_delete(&mut self, outcome: DeleteOutcome) -> FollowUp {
        match outcome.result {
            Ok(()) => {
                info!("Deleted short link {}", outcome.code);
                if self.detail.as_ref().is_some_and(|d| d.code == outcome.code) {
                    self.detail = None;
                }
                self.notice = Some(Notice::success(format!("Deleted: {}", outcome.code)));
                FollowUp::Reload {
                    page: 1,
                    stats: true,
                }
            }
            Err(e) => {
                error!("Delete of {} failed: {:?}", outcome.code, e);
                self.notice = Some(Notice::error(format!(
                    "Delete failed: {}",
                    e.generic_message()
                )));
                FollowUp::None
            }
        }
    }

    pub async fn delete(&mut self, code: &str, confirm: &dyn Confirm) -> FollowUp {
        let Some(request) = self.prepare_delete(code, confirm) else {
            return FollowUp::None;
        };
        let outcome = request.execute().await;
        let follow_up = self.apply_delete(outcome);
        self.follow_up(follow_up).await;
        follow_up
    }

    // ============ detail ============

    pub fn begin_detail(&self, code: &str) -> DetailRequest {
        DetailRequest {
            api: Arc::clone(&self.api),
            token: self.session.token().to_string(),
            code: code.to_string(),
        }
    }

    pub fn apply_detail(&mut self, outcome: DetailOutcome) -> bool {
        match outcome.result {
            Ok(link) => {
                self.detail = Some(link);
                true
            }
            Err(e) => {
                warn!("Failed to fetch details of {}: {}", outcome.code, e);
                self.notice = Some(Notice::error(format!(
                    "Failed to load {}: {}",
                    outcome.code, e
                )));
                false
            }
        }
    }

    pub async fn link_detail(&mut self, code: &str) -> Option<&Link> {
        let outcome = self.begin_detail(code).execute().await;
        if self.apply_detail(outcome) {
            self.detail.as_ref()
        } else {
            None
        }
    }

    /// Run the reloads a successful mutation asked for
    pub async fn follow_up(&mut self, follow_up: FollowUp) {
        if let FollowUp::Reload { page, stats } = follow_up {
            self.load(page).await;
            if stats {
                self.refresh_stats().await;
            }
        }
    }
}
