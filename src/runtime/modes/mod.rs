//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - CLI mode (one-shot subcommands)
//! - TUI mode (Terminal UI, the default when no subcommand is given)

pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;
use crate::system::RunMode;

/// Mode detection result
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Cli,
    #[cfg(feature = "tui")]
    Tui,
}

impl Mode {
    pub fn run_mode(&self) -> RunMode {
        match self {
            Mode::Cli => RunMode::Cli,
            #[cfg(feature = "tui")]
            Mode::Tui => RunMode::Tui,
        }
    }
}

/// Detect which mode to run based on the parsed subcommand
///
/// # Mode Detection Logic
/// 1. `tui`, or no subcommand with the TUI feature enabled -> TUI mode
/// 2. Anything else -> CLI mode
pub fn detect_mode(command: Option<&Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        Some(Commands::Tui) | None => Mode::Tui,
        _ => Mode::Cli,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcommands_run_in_cli_mode() {
        assert_eq!(detect_mode(Some(&Commands::Stats)), Mode::Cli);
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_default_is_tui() {
        assert_eq!(detect_mode(None), Mode::Tui);
        assert_eq!(detect_mode(Some(&Commands::Tui)), Mode::Tui);
        assert_eq!(detect_mode(None).run_mode(), RunMode::Tui);
    }
}
