//! CLI interface module
//!
//! One-shot subcommands printing coloured output. Errors come back as
//! [`CliError`] and are printed by `main` with exit code 1.

pub mod commands;

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::cli::{Commands, TokenCommands};
use crate::errors::LinkdeckError;
use crate::manager::{Confirm, LinkManager};
use crate::session::TokenStore;
use commands::{add_link, link_info, list_links, remove_link, show_stats, token_command};

#[derive(Debug)]
pub enum CliError {
    /// Configuration, token store or local I/O problems
    SetupError(String),
    /// The service rejected a request or could not be reached
    RequestError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::SetupError(msg) => format!("Setup error: {}", msg),
            CliError::RequestError(msg) => format!("Request error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::SetupError(msg) => {
                format!("{} {}", "Setup error:".yellow().bold(), msg.white())
            }
            CliError::RequestError(msg) => {
                format!("{} {}", "Request error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LinkdeckError> for CliError {
    fn from(err: LinkdeckError) -> Self {
        match err {
            LinkdeckError::Api(msg) => CliError::RequestError(msg),
            LinkdeckError::Validation(msg) => CliError::CommandError(msg),
            other => CliError::SetupError(other.format_simple()),
        }
    }
}

/// y/N question on stdin; anything but `y`/`yes` declines
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{} [y/N]: ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        parse_confirmation(&answer)
    }
}

fn parse_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Run the token subcommands, which never touch the API
pub fn run_token_command(store: &TokenStore, action: TokenCommands) -> Result<(), CliError> {
    token_command(store, action)
}

/// Run an API-backed CLI command from clap-parsed input
pub async fn run_cli_command(manager: &mut LinkManager, cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::List { page, search } => list_links(manager, page, search.as_deref()).await,

        Commands::Stats => show_stats(manager).await,

        Commands::Add { url, title, code } => add_link(manager, url, title, code).await,

        Commands::Remove { code, yes } => remove_link(manager, &code, yes).await,

        Commands::Info { code } => link_info(manager, &code).await,

        Commands::Token { .. } => Err(CliError::CommandError(
            "token commands do not use the API".to_string(),
        )),

        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "the TUI is not a one-shot command".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_confirmation() {
        assert!(parse_confirmation("y\n"));
        assert!(parse_confirmation(" YES "));
        assert!(!parse_confirmation("\n"));
        assert!(!parse_confirmation("no"));
        assert!(!parse_confirmation("yep"));
    }

    #[test]
    fn test_error_mapping() {
        let err: CliError = LinkdeckError::api("boom").into();
        assert!(matches!(err, CliError::RequestError(ref m) if m == "boom"));

        let err: CliError = LinkdeckError::config("bad").into();
        assert_eq!(err.format_simple(), "Setup error: Configuration Error: bad");
    }
}
