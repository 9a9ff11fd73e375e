//! Narrative generation error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrativeError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The model endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not carry any text content.
    #[error("parse error: {0}")]
    Parse(String),

    /// The snapshot could not be rendered into a prompt.
    #[error("prompt error: {0}")]
    Prompt(#[from] serde_json::Error),
}
