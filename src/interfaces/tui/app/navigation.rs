//! Navigation and selection logic

use super::state::App;
use crate::interfaces::tui::constants::MAX_PAGE_INPUT_DIGITS;
use crate::view::Notice;

impl App {
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn move_selection_down(&mut self) {
        let len = self.rows().len();
        if self.selected_index < len.saturating_sub(1) {
            self.selected_index += 1;
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.table_state.select(Some(0));
    }

    pub fn jump_to_bottom(&mut self) {
        self.selected_index = self.rows().len().saturating_sub(1);
        self.table_state.select(Some(self.selected_index));
    }

    /// Keep the selection inside the current rows after a reload
    pub fn clamp_selection(&mut self) {
        let len = self.rows().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
        self.table_state.select(Some(self.selected_index));
    }

    pub fn has_next_page(&self) -> bool {
        self.manager.current_page() < self.manager.total_pages()
    }

    pub fn has_prev_page(&self) -> bool {
        self.manager.current_page() > 1
    }

    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.go_to_page(self.manager.current_page() + 1);
        }
    }

    pub fn prev_page(&mut self) {
        if self.has_prev_page() {
            self.go_to_page(self.manager.current_page() - 1);
        }
    }

    /// Load `page`, resetting the selection to the first row
    pub fn go_to_page(&mut self, page: u32) {
        self.selected_index = 0;
        self.table_state.select(Some(0));
        self.request_load(page);
    }

    pub fn push_page_digit(&mut self, digit: char) {
        if self.page_input.len() < MAX_PAGE_INPUT_DIGITS {
            self.page_input.push(digit);
        }
    }

    /// Jump to the typed page number. Out-of-range input is rejected.
    pub fn submit_page_input(&mut self) {
        let input = std::mem::take(&mut self.page_input);
        let Ok(page) = input.parse::<u32>() else {
            return;
        };
        let total = self.manager.total_pages().max(1);
        if page == 0 || page > total {
            self.set_notice(Notice::error(format!(
                "No page {} (1-{})",
                page, total
            )));
            return;
        }
        self.go_to_page(page);
    }
}
