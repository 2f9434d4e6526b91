//! Panic handler module
//!
//! Every mode appends a report to `crash.log`. In TUI mode the terminal is
//! put back into cooked mode first, otherwise the message would be drawn
//! into the alternate screen and lost.

use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

use chrono::Local;

/// File that receives crash reports
pub const CRASH_LOG: &str = "crash.log";

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Tui,
}

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |panic_info| {
        if mode == RunMode::Tui {
            restore_terminal();
        }

        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let backtrace = std::backtrace::Backtrace::force_capture();
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S %:z").to_string();

        if let Err(e) = write_crash_log(&timestamp, &message, &location, &backtrace) {
            eprintln!("Failed to write crash log: {}", e);
        }

        display_panic(&message, &location);
    }));
}

#[cfg(feature = "tui")]
fn restore_terminal() {
    use ratatui::crossterm::{
        execute,
        terminal::{LeaveAlternateScreen, disable_raw_mode},
    };

    let _ = disable_raw_mode();
    let _ = execute!(std::io::stderr(), LeaveAlternateScreen);
}

#[cfg(not(feature = "tui"))]
fn restore_terminal() {}

fn display_panic(message: &str, location: &str) {
    use colored::Colorize;

    eprintln!();
    eprintln!("{} {}", "Program panicked:".red().bold(), message);
    eprintln!("{} {}", "Location:".yellow(), location);
    eprintln!("Details saved to {}", CRASH_LOG.cyan());
    eprintln!();
}

fn write_crash_log(
    timestamp: &str,
    message: &str,
    location: &str,
    backtrace: &std::backtrace::Backtrace,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(CRASH_LOG)?;

    writeln!(file, "==========================================")?;
    writeln!(file, "linkdeck {} crash - {}", env!("CARGO_PKG_VERSION"), timestamp)?;
    writeln!(file, "==========================================")?;
    writeln!(file, "Message: {}", message)?;
    writeln!(file, "Location: {}", location)?;
    writeln!(file, "\nBacktrace:")?;
    writeln!(file, "{:?}", backtrace)?;
    writeln!(file, "==========================================\n")?;

    Ok(())
}
