//! Scanner error types.

use thiserror::Error;

/// Errors that end a scan before a snapshot exists.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The target could not be turned into an absolute http(s) URL.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP transport error (DNS, TLS, timeout, redirect limit).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The site answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    /// The scanner itself could not be set up.
    #[error("scanner setup failed: {0}")]
    Setup(String),
}
