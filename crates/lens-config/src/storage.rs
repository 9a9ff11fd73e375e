//! Report storage configuration.

use serde::{Deserialize, Serialize};

fn default_prefix() -> String {
    String::from("scans")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// S3 bucket name. Takes precedence over `local_dir`.
    #[serde(default)]
    pub bucket: String,

    /// Bucket region. If empty, the AWS SDK environment decides.
    #[serde(default)]
    pub region: String,

    /// Custom S3-compatible endpoint (MinIO, R2, LocalStack).
    #[serde(default)]
    pub endpoint: String,

    #[serde(default)]
    pub access_key_id: String,

    #[serde(default)]
    pub secret_access_key: String,

    /// Key prefix reports are written under.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Directory used instead of S3 when no bucket is set.
    #[serde(default)]
    pub local_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            region: String::new(),
            endpoint: String::new(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            prefix: default_prefix(),
            local_dir: String::new(),
        }
    }
}

impl StorageConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.bucket.is_empty() || !self.local_dir.is_empty()
    }

    /// Whether explicit S3 credentials were supplied.
    #[must_use]
    pub fn has_static_credentials(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}
