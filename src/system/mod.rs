//! System-level modules
//!
//! - Logging setup
//! - Panic handling per run mode

pub mod logging;
pub mod panic_handler;

pub use panic_handler::RunMode;
