//! Application runtime
//!
//! - `startup`: token resolution and wiring of the API client and manager
//! - `modes`: CLI / TUI entry points

pub mod modes;
pub mod startup;
