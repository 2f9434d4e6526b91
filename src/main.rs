use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use linkdeck::cli::Cli;
use linkdeck::config::AppConfig;
use linkdeck::runtime::modes::{self, Mode};
use linkdeck::runtime::startup::TokenOptions;
use linkdeck::system::logging::init_logging;
use linkdeck::system::panic_handler::install_panic_hook;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mode = modes::detect_mode(cli.command.as_ref());
    install_panic_hook(mode.run_mode());

    let mut config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            return ExitCode::FAILURE;
        }
    };
    if let Some(base_url) = cli.base_url.clone() {
        config.api.base_url = base_url;
    }

    // 保持 guard 存活直到程序结束
    let _log_guard = match init_logging(&config.logging, mode.run_mode()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            return ExitCode::FAILURE;
        }
    };
    debug!("Starting in {:?} mode", mode);

    let options = TokenOptions {
        explicit: cli.token.clone(),
        force_prompt: cli.prompt_token,
    };

    match mode {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            if let Err(e) = modes::run_tui(&config, &options).await {
                eprintln!("{}", e.format_colored());
                return ExitCode::FAILURE;
            }
        }
        Mode::Cli => {
            if let Err(e) = modes::run_cli(cli.command, &config, &options).await {
                eprintln!("{}", e.format_colored());
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
