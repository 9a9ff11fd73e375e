//! Schema validation error types.

use thiserror::Error;

/// Errors from the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Requested schema name was not found in the registry.
    #[error("unknown schema '{0}'")]
    NotFound(String),

    /// JSON value did not pass schema validation.
    #[error("validation failed: {}", errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    /// A registered schema could not be compiled into a validator.
    #[error("schema compilation error: {0}")]
    Compilation(String),
}
