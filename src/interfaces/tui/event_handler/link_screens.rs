//! Event handlers for link-related screens
//!
//! Handles: Main, AddLink, DeleteConfirm, ViewDetails

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle main screen input
pub fn handle_main_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::Left | KeyCode::Char('[') | KeyCode::PageUp => app.prev_page(),
        KeyCode::Right | KeyCode::Char(']') | KeyCode::PageDown => app.next_page(),
        KeyCode::Char(c) if c.is_ascii_digit() => app.push_page_digit(c),
        KeyCode::Backspace => {
            app.page_input.pop();
        }
        KeyCode::Esc => {
            // Pending page number first, then the search
            if !app.page_input.is_empty() {
                app.page_input.clear();
            } else {
                app.clear_search();
            }
        }
        KeyCode::Enter if !app.page_input.is_empty() => app.submit_page_input(),
        KeyCode::Enter | KeyCode::Char('v') | KeyCode::Char('V') => app.open_details(),
        KeyCode::Char('/') => app.start_inline_search(),
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('a') | KeyCode::Char('A') => app.open_add_dialog(),
        KeyCode::Char('d') | KeyCode::Char('D') => app.open_delete_confirm(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.refresh(),
        KeyCode::Char('y') => app.copy_short_url(),
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    false
}

/// Handle add link screen input
pub fn handle_add_link_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Enter => app.submit_create(),
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Esc => app.close_add_dialog(),
        KeyCode::Tab | KeyCode::Down => app.form.toggle_field(),
        KeyCode::BackTab | KeyCode::Up => app.form.toggle_field_back(),
        KeyCode::Char(c) => app.form.push_char(c),
        _ => {}
    }
    false
}

/// Handle delete confirmation screen input
pub fn handle_delete_confirm_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
        _ => {}
    }
    false
}

/// Handle view details screen input
pub fn handle_view_details_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Enter => {
            app.close_details();
        }
        KeyCode::Char('y') => app.copy_short_url(),
        _ => {}
    }
    false
}
