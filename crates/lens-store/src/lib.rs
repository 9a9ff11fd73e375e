//! # lens-store
//!
//! Persists scan reports to object storage: an S3 bucket (or any
//! S3-compatible endpoint) or a local directory, through `object_store`.

mod error;
mod store;

pub use error::StoreError;
pub use store::ReportStore;
