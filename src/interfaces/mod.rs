//! User-facing front ends
//!
//! Both drive a [`crate::manager::LinkManager`]; neither talks HTTP itself.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
