//! TUI application state and behaviour
//!
//! - `state`: the [`App`] struct, screens and form state
//! - `navigation`: row selection and page changes
//! - `link_operations`: requests and the handling of their results

mod link_operations;
mod navigation;
mod state;

pub use state::{App, CurrentScreen, EditingField, FormState};
