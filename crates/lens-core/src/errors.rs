//! Cross-cutting error types for CookieLens.
//!
//! Domain-specific errors (e.g., `ScanError`, `NarrativeError`) are defined in
//! their respective crates. They converge in the CLI's scan pipeline.

use thiserror::Error;

/// Errors raised while decoding core documents.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A snapshot document could not be decoded.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),
}
