//! Static configuration
//!
//! Loaded once at startup from TOML, then overridden by environment variables
//! and finally by command-line flags. See [`AppConfig::load`].

mod loader;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use loader::CONFIG_SEARCH_PATHS;

/// Name of the token file inside the per-user config directory
pub const TOKEN_FILE_NAME: &str = "credentials.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub token: TokenConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 远端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,
    /// No timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Token 持久化配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenConfig {
    #[serde(default)]
    pub store_path: Option<String>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://127.0.0.1:8080/api/v1".to_string()
}

fn default_page_limit() -> u32 {
    crate::session::DEFAULT_PAGE_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    false
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_limit: default_page_limit(),
            timeout_secs: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl TokenConfig {
    /// Configured path, else `<user config dir>/credentials.json`, else the
    /// working directory.
    pub fn resolve_store_path(&self) -> PathBuf {
        if let Some(path) = self.store_path.as_deref().filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        directories::ProjectDirs::from("", "", "linkdeck")
            .map(|dirs| dirs.config_dir().join(TOKEN_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(format!("linkdeck_{}", TOKEN_FILE_NAME)))
    }
}
