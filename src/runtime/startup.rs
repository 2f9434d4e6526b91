//! Startup wiring shared by the CLI and the TUI

use std::io::IsTerminal;
use std::sync::Arc;

use tracing::{info, warn};

use crate::client::HttpLinkApi;
use crate::config::AppConfig;
use crate::errors::{LinkdeckError, Result};
use crate::manager::LinkManager;
use crate::session::{Session, TokenSource, TokenStore, resolve_token};

/// Token-related inputs from the command line
#[derive(Debug, Clone, Default)]
pub struct TokenOptions {
    /// `--token` / `LINKDECK_TOKEN`
    pub explicit: Option<String>,
    /// `--prompt-token`
    pub force_prompt: bool,
}

pub fn token_store(config: &AppConfig) -> TokenStore {
    TokenStore::new(config.token.resolve_store_path())
}

/// Hidden prompt on a TTY. Runs when nothing is stored or when forced;
/// an empty answer keeps the stored token.
fn prompt_for_token(stored: Option<&str>, force: bool) -> Result<Option<String>> {
    if stored.is_some() && !force {
        return Ok(None);
    }
    if !std::io::stdin().is_terminal() {
        return Ok(None);
    }
    let question = if stored.is_some() {
        "API token (Enter keeps the stored one): "
    } else {
        "API token: "
    };
    rpassword::prompt_password(question)
        .map(Some)
        .map_err(|e| LinkdeckError::io(format!("cannot read token: {}", e)))
}

/// Resolve the token, build the HTTP client and hand both to a manager
pub fn build_manager(config: &AppConfig, options: &TokenOptions) -> Result<LinkManager> {
    let store = token_store(config);
    let resolved = resolve_token(options.explicit.as_deref(), &store, |stored| {
        prompt_for_token(stored, options.force_prompt)
    })?;
    if resolved.source == TokenSource::Missing {
        warn!(
            "No API token configured; use `linkdeck token set` or --token (store: {})",
            store.path().display()
        );
    }

    let api = HttpLinkApi::new(&config.api)?;
    info!("Using API at {}", api.base_url());

    let session = Session::new(resolved.token, config.api.page_limit);
    Ok(LinkManager::new(Arc::new(api), session))
}
