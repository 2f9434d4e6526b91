//! Link operations: dispatching requests and applying their results

use tracing::{debug, warn};

use super::state::{App, CurrentScreen};
use crate::interfaces::tui::tasks::ApiEvent;
use crate::manager::{Confirmed, FollowUp};
use crate::view::Notice;

impl App {
    /// Initial fetch of page 1 and the stats
    pub fn start(&mut self) {
        self.request_load(1);
        self.request_stats();
    }

    pub fn request_load(&mut self, page: u32) {
        let request = self.manager.begin_load(page);
        self.runner.list(request);
    }

    pub fn request_stats(&mut self) {
        let request = self.manager.begin_stats();
        self.runner.stats(request);
    }

    /// `r`: reload the current page and the stats
    pub fn refresh(&mut self) {
        let request = self.manager.begin_reload();
        self.runner.list(request);
        self.request_stats();
        self.set_notice(Notice::info("Refreshing..."));
    }

    // ============ search ============

    pub fn start_inline_search(&mut self) {
        self.inline_search_mode = true;
        self.search_input = self
            .manager
            .session()
            .mode()
            .query()
            .unwrap_or_default()
            .to_string();
    }

    pub fn submit_search(&mut self) {
        self.inline_search_mode = false;
        self.selected_index = 0;
        self.table_state.select(Some(0));
        let request = self.manager.begin_search(&self.search_input);
        self.runner.list(request);
    }

    pub fn cancel_inline_search(&mut self) {
        self.inline_search_mode = false;
    }

    /// Esc on the main screen: back to browsing
    pub fn clear_search(&mut self) {
        if !self.manager.session().mode().is_search() {
            return;
        }
        self.search_input.clear();
        self.selected_index = 0;
        self.table_state.select(Some(0));
        let request = self.manager.begin_search("");
        self.runner.list(request);
    }

    // ============ create ============

    pub fn open_add_dialog(&mut self) {
        self.form.reset();
        self.manager.open_create_dialog();
        self.current_screen = CurrentScreen::AddLink;
    }

    pub fn close_add_dialog(&mut self) {
        self.manager.close_create_dialog();
        self.form.reset();
        self.current_screen = CurrentScreen::Main;
    }

    pub fn submit_create(&mut self) {
        if !self.form.validate_for_submit() {
            return;
        }
        match self.manager.prepare_create(self.form.to_create_form()) {
            Some(request) => {
                self.set_notice(Notice::info("Creating..."));
                self.runner.create(request);
            }
            None => self.pull_notice(),
        }
    }

    // ============ delete ============

    pub fn open_delete_confirm(&mut self) {
        if let Some(code) = self.get_selected_row().map(|r| r.code.clone()) {
            self.pending_delete = Some(code);
            self.current_screen = CurrentScreen::DeleteConfirm;
        }
    }

    /// `y` in the delete dialog. The dialog itself was the confirmation.
    pub fn confirm_delete(&mut self) {
        self.current_screen = CurrentScreen::Main;
        let Some(code) = self.pending_delete.take() else {
            return;
        };
        if let Some(request) = self.manager.prepare_delete(&code, &Confirmed) {
            self.set_notice(Notice::info(format!("Deleting {}...", code)));
            self.runner.delete(request);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
        self.current_screen = CurrentScreen::Main;
    }

    // ============ details ============

    pub fn open_details(&mut self) {
        let Some(code) = self.get_selected_row().map(|r| r.code.clone()) else {
            return;
        };
        self.manager.clear_detail();
        let request = self.manager.begin_detail(&code);
        self.viewing_code = Some(code);
        self.current_screen = CurrentScreen::ViewDetails;
        self.runner.detail(request);
    }

    pub fn close_details(&mut self) {
        self.viewing_code = None;
        self.manager.clear_detail();
        self.current_screen = CurrentScreen::Main;
    }

    // ============ clipboard ============

    pub fn copy_short_url(&mut self) {
        let Some(text) = self.get_selected_row().map(|r| r.short_url.clone()) else {
            return;
        };
        let result = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(&text));
        match result {
            Ok(()) => self.set_notice(Notice::success(format!("Copied: {}", text))),
            Err(e) => {
                warn!("Clipboard unavailable: {}", e);
                self.set_notice(Notice::error(format!("Clipboard unavailable: {}", e)));
            }
        }
    }

    // ============ results ============

    /// Apply a finished request and start whatever it asks for next
    pub fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::List(outcome) => {
                if self.manager.apply_load(outcome) {
                    self.clamp_selection();
                }
            }
            ApiEvent::Stats(outcome) => {
                self.manager.apply_stats(outcome);
            }
            ApiEvent::Create(outcome) => {
                let follow_up = self.manager.apply_create(outcome);
                if !self.manager.is_create_dialog_open() && self.current_screen == CurrentScreen::AddLink {
                    self.form.reset();
                    self.current_screen = CurrentScreen::Main;
                }
                self.run_follow_up(follow_up);
            }
            ApiEvent::Delete(outcome) => {
                let follow_up = self.manager.apply_delete(outcome);
                self.run_follow_up(follow_up);
            }
            ApiEvent::Detail(outcome) => {
                if self.viewing_code.as_deref() != Some(outcome.code.as_str()) {
                    debug!("Dropping details of {}, view moved on", outcome.code);
                    return;
                }
                self.manager.apply_detail(outcome);
            }
        }
        self.pull_notice();
    }

    fn run_follow_up(&mut self, follow_up: FollowUp) {
        if let FollowUp::Reload { page, stats } = follow_up {
            if page != self.manager.current_page() {
                self.selected_index = 0;
                self.table_state.select(Some(0));
            }
            self.request_load(page);
            if stats {
                self.request_stats();
            }
        }
    }
}
