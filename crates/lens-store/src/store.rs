//! Scan report persistence on object storage.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use lens_config::StorageConfig;
use lens_core::entities::ScanReport;
use object_store::aws::AmazonS3Builder;
use object_store::local::LocalFileSystem;
use object_store::path::Path;
use object_store::{ObjectStore, PutPayload};
use tracing::{debug, instrument};

use crate::error::StoreError;

/// Timestamp layout of report keys, e.g. `20250115T093000.250`.
const KEY_TIMESTAMP: &str = "%Y%m%dT%H%M%S%.3f";

/// Writes scan reports as pretty JSON under `<prefix>/<timestamp>_scan.json`.
#[derive(Debug, Clone)]
pub struct ReportStore {
    store: Arc<dyn ObjectStore>,
    /// Scheme and root reported locations start with, e.g. `s3://reports`.
    root: String,
    prefix: String,
}

impl ReportStore {
    /// Wrap an existing backend. `root` is prepended to keys in returned
    /// locations.
    #[must_use]
    pub fn new(store: Arc<dyn ObjectStore>, root: impl Into<String>, prefix: &str) -> Self {
        Self {
            store,
            root: root.into().trim_end_matches('/').to_string(),
            prefix: prefix.trim_matches('/').to_string(),
        }
    }

    /// Backend chosen by configuration: S3 when a bucket is set, otherwise a
    /// local directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotConfigured`] when neither is set, or the
    /// backend's construction error.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StoreError> {
        if !config.bucket.is_empty() {
            Self::s3(config)
        } else if !config.local_dir.is_empty() {
            Self::local(PathBuf::from(&config.local_dir), &config.prefix)
        } else {
            Err(StoreError::NotConfigured)
        }
    }

    /// S3 or S3-compatible bucket. Settings missing from `config` fall back
    /// to the standard `AWS_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ObjectStore`] if the client cannot be built.
    pub fn s3(config: &StorageConfig) -> Result<Self, StoreError> {
        let mut builder = AmazonS3Builder::from_env().with_bucket_name(&config.bucket);
        if !config.region.is_empty() {
            builder = builder.with_region(&config.region);
        }
        if !config.endpoint.is_empty() {
            builder = builder
                .with_endpoint(&config.endpoint)
                .with_allow_http(config.endpoint.starts_with("http://"));
        }
        if config.has_static_credentials() {
            builder = builder
                .with_access_key_id(&config.access_key_id)
                .with_secret_access_key(&config.secret_access_key);
        }
        let store = builder.build()?;
        Ok(Self::new(
            Arc::new(store),
            format!("s3://{}", config.bucket),
            &config.prefix,
        ))
    }

    /// Directory on the local filesystem, created if missing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::LocalDir`] if the directory cannot be created
    /// and [`StoreError::ObjectStore`] if it cannot be opened.
    pub fn local(dir: PathBuf, prefix: &str) -> Result<Self, StoreError> {
        let local_err = |source| StoreError::LocalDir {
            path: dir.display().to_string(),
            source,
        };
        std::fs::create_dir_all(&dir).map_err(local_err)?;
        let dir = std::fs::canonicalize(&dir).map_err(local_err)?;
        let store = LocalFileSystem::new_with_prefix(&dir)?;
        Ok(Self::new(
            Arc::new(store),
            format!("file://{}", dir.display()),
            prefix,
        ))
    }

    /// Key a report taken at `at` is stored under.
    #[must_use]
    pub fn key_for(&self, at: DateTime<Utc>) -> Path {
        let file = format!("{}_scan.json", at.format(KEY_TIMESTAMP));
        if self.prefix.is_empty() {
            Path::from(file)
        } else {
            Path::from(format!("{}/{file}", self.prefix))
        }
    }

    /// Full location of `key`, e.g. `s3://reports/scans/20250115T093000.000_scan.json`.
    #[must_use]
    pub fn location(&self, key: &Path) -> String {
        format!("{}/{key}", self.root)
    }

    /// Write `report` under the key for `at` and return its location.
    ///
    /// Keys have millisecond resolution. A second report stored within the
    /// same millisecond replaces the first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or the upload fails.
    #[instrument(skip(self, report))]
    pub async fn put(&self, report: &ScanReport, at: DateTime<Utc>) -> Result<String, StoreError> {
        let key = self.key_for(at);
        let body = serde_json::to_vec_pretty(report)?;
        let bytes = body.len();
        self.store.put(&key, PutPayload::from(body)).await?;

        let location = self.location(&key);
        debug!(%location, bytes, "report stored");
        Ok(location)
    }

    /// Read back the report stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ObjectStore`] if the object is missing or
    /// unreadable and [`StoreError::Serialization`] if it is not a report.
    pub async fn get(&self, key: &str) -> Result<ScanReport, StoreError> {
        let data = self.store.get(&Path::from(key)).await?.bytes().await?;
        Ok(serde_json::from_slice(&data)?)
    }
}
