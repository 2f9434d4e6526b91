//! linkdeck - terminal client for a short-link management service
//!
//! Browse, search, create and delete the links of a remote short-link
//! service from one-shot CLI commands or an interactive TUI.
//!
//! # Features
//! - **cli**: Command-line interface
//! - **tui**: Terminal user interface (default)
//! - **full**: All features enabled
//!
//! # Architecture
//! - `client`: HTTP client for the remote API behind the `LinkApi` trait
//! - `session`: session state, request sequencing and the token store
//! - `view`: pure view models (rows, pagination, stats, notices)
//! - `manager`: `LinkManager`, the operations front ends trigger
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: startup wiring and execution modes
//! - `system`: logging and panic handling

#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod manager;
#[cfg(feature = "cli")]
pub mod runtime;
pub mod session;
pub mod system;
pub mod view;
