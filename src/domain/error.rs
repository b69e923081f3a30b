//! Error types for the ztodo plugin.
//!
//! List operations are total and never fail; errors only arise at the
//! boundaries where untyped input (configuration strings, theme files) is
//! turned into typed values. All variants derive their `Display` through
//! `thiserror`.

use thiserror::Error;

/// The main error type for ztodo operations.
///
/// # Examples
///
/// ```
/// use ztodo::domain::TodoError;
///
/// let err = TodoError::InvalidFilter("done".to_string());
/// assert_eq!(err.to_string(), "Invalid filter: \"done\" (expected all, active or completed)");
/// ```
#[derive(Debug, Error)]
pub enum TodoError {
    /// A filter name other than `all`, `active` or `completed` was given.
    ///
    /// The list state is left untouched when this is returned.
    #[error("Invalid filter: {0:?} (expected all, active or completed)")]
    InvalidFilter(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for ztodo operations.
pub type Result<T> = std::result::Result<T, TodoError>;
