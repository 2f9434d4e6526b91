use std::env;
use std::fs;
use std::path::Path;

use tracing::{debug, error, warn};

use super::AppConfig;
use crate::errors::{LinkdeckError, Result};

/// Candidate config files, first existing wins
pub const CONFIG_SEARCH_PATHS: [&str; 2] = ["linkdeck.toml", "config/linkdeck.toml"];

impl AppConfig {
    /// Load configuration from TOML file with environment variable fallback.
    ///
    /// An explicit path must exist and parse; discovered files that fail to
    /// parse are skipped with a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from_path(path)?,
            None => Self::discover(),
        };
        config.override_with_env();
        config.validate()?;
        Ok(config)
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LinkdeckError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        toml::from_str::<AppConfig>(&content)
            .map_err(|e| LinkdeckError::config(format!("cannot parse {}: {}", path.display(), e)))
    }

    fn discover() -> Self {
        let user_config = directories::ProjectDirs::from("", "", "linkdeck")
            .map(|dirs| dirs.config_dir().join("linkdeck.toml"));

        let candidates = CONFIG_SEARCH_PATHS
            .iter()
            .map(|p| Path::new(p).to_path_buf())
            .chain(user_config);

        for path in candidates {
            if !path.exists() {
                continue;
            }
            debug!("Loading config from: {}", path.display());
            match Self::load_from_path(&path) {
                Ok(config) => return config,
                Err(e) => warn!("Skipping config file: {}", e),
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    /// Override configuration with environment variables
    pub fn override_with_env(&mut self) {
        self.override_with(|key| env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable source
    pub fn override_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // API config
        if let Some(base_url) = lookup("LINKDECK_BASE_URL") {
            self.api.base_url = base_url;
        }
        if let Some(limit) = lookup("LINKDECK_PAGE_LIMIT") {
            match limit.parse() {
                Ok(limit) => self.api.page_limit = limit,
                Err(_) => error!("Invalid LINKDECK_PAGE_LIMIT: {}", limit),
            }
        }
        if let Some(timeout) = lookup("LINKDECK_TIMEOUT") {
            match timeout.parse::<u64>() {
                Ok(0) => self.api.timeout_secs = None,
                Ok(secs) => self.api.timeout_secs = Some(secs),
                Err(_) => error!("Invalid LINKDECK_TIMEOUT: {}", timeout),
            }
        }

        // Token config
        if let Some(path) = lookup("LINKDECK_TOKEN_FILE") {
            self.token.store_path = Some(path);
        }

        // Logging config
        if let Some(level) = lookup("RUST_LOG") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LINKDECK_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Some(file) = lookup("LINKDECK_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(LinkdeckError::config("api.base_url must not be empty"));
        }
        if self.api.page_limit == 0 {
            return Err(LinkdeckError::config("api.page_limit must be at least 1"));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(LinkdeckError::config(format!(
                "logging.format must be \"text\" or \"json\", got \"{}\"",
                self.logging.format
            )));
        }
        Ok(())
    }
}
