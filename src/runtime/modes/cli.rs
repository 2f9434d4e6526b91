//! CLI mode
//!
//! Token commands only need the token store; everything else builds a
//! manager first and delegates to the CLI implementation.

use crate::cli::Commands;
use crate::config::AppConfig;
use crate::interfaces::cli::{self, CliError};
use crate::runtime::startup::{self, TokenOptions};

/// Run one CLI command
pub async fn run_cli(
    command: Option<Commands>,
    config: &AppConfig,
    options: &TokenOptions,
) -> Result<(), CliError> {
    let Some(command) = command else {
        return Err(CliError::CommandError(
            "no command given, see --help".to_string(),
        ));
    };

    if let Commands::Token { action } = command {
        return cli::run_token_command(&startup::token_store(config), action);
    }

    let mut manager = startup::build_manager(config, options)?;
    cli::run_cli_command(&mut manager, command).await
}
