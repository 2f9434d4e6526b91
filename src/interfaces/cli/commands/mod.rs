//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod add;
mod info;
mod list;
mod output;
mod remove;
mod stats;
mod token;

pub use add::add_link;
pub use info::link_info;
pub use list::list_links;
pub use remove::remove_link;
pub use stats::show_stats;
pub use token::{mask_token, token_command};
