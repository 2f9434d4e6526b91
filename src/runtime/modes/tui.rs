//! TUI mode
//!
//! Resolves the token (the prompt must run before the alternate screen is
//! entered) and delegates to the TUI implementation.

use crate::config::AppConfig;
use crate::errors::Result;
use crate::runtime::startup::{self, TokenOptions};

/// Run TUI mode
pub async fn run_tui(config: &AppConfig, options: &TokenOptions) -> Result<()> {
    let manager = startup::build_manager(config, options)?;
    crate::interfaces::tui::run_tui(manager).await
}
