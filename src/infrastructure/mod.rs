//! Sandbox filesystem conventions.
//!
//! Inside the Zellij plugin sandbox the host filesystem is mounted under
//! `/host`.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
