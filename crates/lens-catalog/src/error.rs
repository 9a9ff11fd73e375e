//! Catalog error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading a framework catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("cannot read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The catalog is not valid TOML or does not match the catalog layout.
    #[error("invalid catalog {origin}: {source}")]
    Parse {
        origin: String,
        source: toml::de::Error,
    },

    /// The catalog parsed but is inconsistent.
    #[error("invalid catalog: {0}")]
    Invalid(String),
}
