//! Report store error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Object storage backend error (network, credentials, missing object).
    #[error("object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    /// The report could not be encoded or a stored object is not a report.
    #[error("report serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The local report directory could not be created.
    #[error("cannot prepare report directory {path}: {source}")]
    LocalDir {
        path: String,
        source: std::io::Error,
    },

    /// Storage is not configured.
    #[error("report storage is not configured (set storage.bucket or storage.local_dir)")]
    NotConfigured,
}
