//! # lens-narrative
//!
//! Free-text risk commentary for scan snapshots.
//!
//! The narrative is advisory: it never feeds into scores, and the scan
//! workflow replaces a failed narrative with [`failure_placeholder`] instead
//! of failing the report.

pub mod bedrock;

mod error;
mod http;

use std::future::Future;

use lens_core::entities::Snapshot;

pub use bedrock::BedrockNarrator;
pub use error::NarrativeError;

/// Produces a human-readable assessment of a snapshot.
pub trait NarrativeGenerator: Send + Sync {
    fn summarize(
        &self,
        snapshot: &Snapshot,
    ) -> impl Future<Output = Result<String, NarrativeError>> + Send;
}

/// Narrative text reported in place of a failed generation.
#[must_use]
pub fn failure_placeholder(err: &NarrativeError) -> String {
    format!("Narrative generation failed: {err}")
}
