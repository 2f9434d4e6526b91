//! Logging system initialization
//!
//! CLI runs log to stderr unless a file is configured. The TUI owns the
//! terminal, so it always logs to a file: the configured one, or
//! `linkdeck-tui.log` in the per-user data directory.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

use super::RunMode;
use crate::config::LoggingConfig;
use crate::errors::{LinkdeckError, Result};

/// Log file used by the TUI when none is configured
pub const TUI_LOG_FILE_NAME: &str = "linkdeck-tui.log";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Rolling(PathBuf),
}

/// Pick the log destination for `mode`
pub fn log_target(config: &LoggingConfig, mode: RunMode) -> LogTarget {
    match config.file.as_deref().filter(|f| !f.is_empty()) {
        Some(file) if config.enable_rotation => LogTarget::Rolling(PathBuf::from(file)),
        Some(file) => LogTarget::File(PathBuf::from(file)),
        None if mode == RunMode::Tui => LogTarget::File(default_tui_log_path()),
        None => LogTarget::Stderr,
    }
}

fn default_tui_log_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "linkdeck")
        .map(|dirs| dirs.data_local_dir().join(TUI_LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(TUI_LOG_FILE_NAME))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn open_writer(target: &LogTarget, max_backups: u32) -> Result<Box<dyn Write + Send + Sync>> {
    let writer: Box<dyn Write + Send + Sync> = match target {
        LogTarget::Stderr => Box::new(std::io::stderr()),
        LogTarget::File(path) => {
            ensure_parent(path)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    LinkdeckError::io(format!("cannot open log file {}: {}", path.display(), e))
                })?;
            Box::new(file)
        }
        LogTarget::Rolling(path) => {
            ensure_parent(path)?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let prefix = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("linkdeck.log")
                .trim_end_matches(".log")
                .to_string();
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(prefix)
                .filename_suffix("log")
                .max_log_files(max_backups.max(1) as usize)
                .build(dir)
                .map_err(|e| LinkdeckError::io(format!("cannot create rolling log: {}", e)))?;
            Box::new(appender)
        }
    };
    Ok(writer)
}

/// Initialize logging for the given run mode.
///
/// Call once, after the configuration has been loaded. The returned guard
/// must stay alive for the whole program so buffered lines get flushed.
pub fn init_logging(config: &LoggingConfig, mode: RunMode) -> Result<WorkerGuard> {
    let target = log_target(config, mode);
    let writer = open_writer(&target, config.max_backups)?;

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(target == LogTarget::Stderr);

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| LinkdeckError::config(format!("cannot install logger: {}", e)))?;

    Ok(guard)
}
