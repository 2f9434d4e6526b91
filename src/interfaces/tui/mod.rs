//! Terminal User Interface (TUI) module
//!
//! Provides an interactive terminal interface for managing short links.
//! Key presses are handled on the UI thread; API calls run on spawned tasks
//! and come back as [`tasks::ApiEvent`]s drained once per loop iteration.

use std::io;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info};

mod app;
mod constants;
mod event_handler;
mod tasks;
mod ui;

#[cfg(test)]
mod test_support;

use app::App;
use constants::EVENT_POLL_INTERVAL;
use tasks::{ApiEvent, TaskRunner};
use ui::ui;

use crate::errors::{LinkdeckError, Result};
use crate::manager::LinkManager;

/// Run the TUI application
pub async fn run_tui(manager: LinkManager) -> Result<()> {
    enable_raw_mode().map_err(|e| LinkdeckError::terminal(format!("raw mode: {}", e)))?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)
        .map_err(|e| LinkdeckError::terminal(format!("alternate screen: {}", e)))?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal =
        Terminal::new(backend).map_err(|e| LinkdeckError::terminal(e.to_string()))?;

    let (runner, mut rx) = TaskRunner::new();
    let mut app = App::new(manager, runner);
    app.start();
    info!("TUI started");

    let res = run_app(&mut terminal, &mut app, &mut rx);

    // Restore terminal even if the loop failed
    let restored = disable_raw_mode()
        .and_then(|_| execute!(terminal.backend_mut(), LeaveAlternateScreen))
        .and_then(|_| terminal.show_cursor());
    if let Err(e) = &restored {
        error!("Failed to restore terminal: {}", e);
    }

    res.map_err(|e| LinkdeckError::terminal(e.to_string()))?;
    restored.map_err(|e| LinkdeckError::terminal(e.to_string()))?;
    info!("TUI exited");
    Ok(())
}

/// Drain finished requests without blocking
fn drain_api_events(app: &mut App, rx: &mut UnboundedReceiver<ApiEvent>) {
    while let Ok(event) = rx.try_recv() {
        debug!("API event: {:?}", event);
        app.handle_api_event(event);
    }
}

/// Main application loop
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
    rx: &mut UnboundedReceiver<ApiEvent>,
) -> io::Result<()> {
    loop {
        drain_api_events(app, rx);

        terminal.draw(|f| ui(f, app))?;

        if !event::poll(EVENT_POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key.code)
        {
            return Ok(());
        }
    }
}
