//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for linkdeck using clap's derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// linkdeck - manage the links of a short-link service from the terminal
#[derive(Parser, Debug)]
#[command(name = "linkdeck")]
#[command(version)]
#[command(about = "Browse, search, create and delete short links", long_about = None)]
pub struct Cli {
    /// API base URL, e.g. http://127.0.0.1:8080/api/v1
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Bearer token (persisted to the token store when given)
    #[arg(long, global = true, env = "LINKDECK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Ask for the token even if one is stored
    #[arg(long, global = true)]
    pub prompt_token: bool,

    /// Config file (default: linkdeck.toml, config/linkdeck.toml, user config dir)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive terminal UI (default)
    #[cfg(feature = "tui")]
    Tui,

    /// List short links, optionally filtered by a search query
    List {
        /// Page to show, starting at 1
        #[arg(long, short = 'p', default_value_t = 1)]
        page: u32,

        /// Search query (empty lists everything)
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show aggregate statistics
    Stats,

    /// Create a short link
    Add {
        /// Target URL
        url: String,

        /// Title shown in listings
        #[arg(long, short = 't', default_value = "")]
        title: String,

        /// Custom short code (generated by the server if omitted)
        #[arg(long)]
        code: Option<String>,
    },

    /// Delete a short link
    Remove {
        /// Short code to delete
        code: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show one short link
    Info {
        /// Short code to look up
        code: String,
    },

    /// Manage the stored API token
    Token {
        #[command(subcommand)]
        action: TokenCommands,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TokenCommands {
    /// Store a token
    Set {
        /// Token value
        token: String,
    },
    /// Remove the stored token
    Clear,
    /// Show where the token is stored and a masked preview
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["linkdeck", "list"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::List {
                page: 1,
                search: None
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "linkdeck",
            "remove",
            "abc",
            "--yes",
            "--base-url",
            "http://h/api/v1",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://h/api/v1"));
        assert_eq!(
            cli.command,
            Some(Commands::Remove {
                code: "abc".into(),
                yes: true
            })
        );
    }

    #[test]
    fn test_add_requires_url() {
        assert!(Cli::try_parse_from(["linkdeck", "add"]).is_err());
    }

    #[test]
    fn test_token_set_takes_value() {
        let cli = Cli::try_parse_from(["linkdeck", "token", "set", "abc"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Token {
                action: TokenCommands::Set { token: "abc".into() }
            })
        );
    }
}
