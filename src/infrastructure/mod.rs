//! Filesystem helpers for the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`; see [`paths`].

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
