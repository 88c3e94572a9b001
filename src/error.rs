//! Error types module.
//!
//! This module defines the error types used throughout the dnsrank
//! application. It uses `thiserror` for structured error handling and
//! provides a custom `Result` type alias for convenience.

use thiserror::Error;

/// A specialized `Result` type for dnsrank operations.
///
/// This type is used throughout the crate to handle errors consistently.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for dnsrank application.
///
/// Each variant represents a different category of error. Per-probe
/// failures (timeouts, refused connections, bad HTTP status, non-zero
/// exit codes) are *not* represented here: they are absorbed into a
/// failed `ProbeResult` and never surface as an `Error`. Only
/// program-terminating conditions (unreadable config, unwritable report,
/// missing DoT binary) travel through this type.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (file operations, network sockets, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error (server list files, export)
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error (DoH transport setup)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Network-related error (connection failures, TLS setup)
    #[error("Network error: {0}")]
    Network(String),

    /// Configuration error (invalid config, missing files)
    #[error("Config error: {0}")]
    Config(String),

    /// Parse error (invalid input format, malformed data)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Operation timeout
    #[error("Operation timed out")]
    Timeout,
}

impl Error {
    /// Create a new network error with a message.
    #[must_use]
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a new configuration error with a message.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new parse error with a message.
    #[must_use]
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
