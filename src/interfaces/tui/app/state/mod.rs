//! App state definition and basic state management
//!
//! 包含核心 App 结构和基础状态管理

mod form_state;

pub use form_state::{EditingField, FormState};

use ratatui::widgets::TableState;

use crate::interfaces::tui::tasks::TaskRunner;
use crate::manager::LinkManager;
use crate::view::{LinkRow, Notice};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    AddLink,
    DeleteConfirm,
    ViewDetails,
    Help,
    Exiting,
}

pub struct App {
    pub manager: LinkManager,
    pub runner: TaskRunner,
    pub current_screen: CurrentScreen,

    // Form state for add
    pub form: FormState,

    // Search input
    pub search_input: String,
    pub inline_search_mode: bool,

    // Digits typed on the main screen, jump target on Enter
    pub page_input: String,

    // UI state
    pub selected_index: usize,
    pub table_state: TableState,
    pub notice: Option<Notice>,

    /// Code the delete dialog was opened for
    pub pending_delete: Option<String>,
    /// Code the details view was opened for
    pub viewing_code: Option<String>,
}

impl App {
    pub fn new(manager: LinkManager, runner: TaskRunner) -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        App {
            manager,
            runner,
            current_screen: CurrentScreen::Main,
            form: FormState::new(),
            search_input: String::new(),
            inline_search_mode: false,
            page_input: String::new(),
            selected_index: 0,
            table_state,
            notice: None,
            pending_delete: None,
            viewing_code: None,
        }
    }

    pub fn rows(&self) -> &[LinkRow] {
        self.manager.table().rows()
    }

    pub fn get_selected_row(&self) -> Option<&LinkRow> {
        self.rows().get(self.selected_index)
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Move the manager's pending notice, if any, to the status bar
    pub fn pull_notice(&mut self) {
        if let Some(notice) = self.manager.take_notice() {
            self.notice = Some(notice);
        }
    }
}
