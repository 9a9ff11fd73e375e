//! Scan workflow: scan → aggregate → narrate → store.
//!
//! Collaborators are injected: the scanner and control source are required,
//! the narrator and report store are optional. A failed narrative is
//! replaced by a placeholder; every other failure aborts the run.

use chrono::Utc;
use lens_core::ControlSource;
use lens_core::entities::ScanReport;
use lens_engine::{Aggregator, EngineError};
use lens_narrative::{BedrockNarrator, NarrativeGenerator, failure_placeholder};
use lens_scanner::{ScanError, Scanner};
use lens_store::{ReportStore, StoreError};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("evaluation failed: {0}")]
    Engine(#[from] EngineError),

    #[error("storing the report failed: {0}")]
    Store(#[from] StoreError),
}

/// One end-to-end scan of a URL.
pub struct ScanPipeline<S, C, N = BedrockNarrator> {
    scanner: S,
    aggregator: Aggregator<C>,
    narrator: Option<N>,
    store: Option<ReportStore>,
}

impl<S: Scanner, C: ControlSource> ScanPipeline<S, C> {
    /// A pipeline without narrative or storage.
    pub const fn new(scanner: S, aggregator: Aggregator<C>) -> Self {
        Self {
            scanner,
            aggregator,
            narrator: None,
            store: None,
        }
    }
}

impl<S, C, N> ScanPipeline<S, C, N>
where
    S: Scanner,
    C: ControlSource,
    N: NarrativeGenerator,
{
    #[must_use]
    pub fn with_narrator<M: NarrativeGenerator>(self, narrator: M) -> ScanPipeline<S, C, M> {
        ScanPipeline {
            scanner: self.scanner,
            aggregator: self.aggregator,
            narrator: Some(narrator),
            store: self.store,
        }
    }

    #[must_use]
    pub fn with_store(mut self, store: ReportStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Scan `url` and evaluate it against `frameworks` (the engine defaults
    /// when `None`).
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] when the scan, the control source, or the
    /// report store fails. Narrative failures never surface here.
    #[instrument(skip(self, frameworks))]
    pub async fn run(
        &self,
        url: &str,
        frameworks: Option<&[String]>,
    ) -> Result<ScanReport, PipelineError> {
        let snapshot = self.scanner.scan(url).await?;
        debug!(
            cookies = snapshot.cookies.len(),
            third_parties = snapshot.third_parties.len(),
            "snapshot captured"
        );

        let report = self.aggregator.aggregate(&snapshot, frameworks)?;
        let mut scan_report = ScanReport::new(report);

        if let Some(narrator) = &self.narrator {
            let text = match narrator.summarize(&scan_report.report.scan_results).await {
                Ok(text) => text,
                Err(err) => {
                    warn!(error = %err, "narrative generation failed");
                    failure_placeholder(&err)
                }
            };
            scan_report.narrative = Some(text);
        }

        if let Some(store) = &self.store {
            let location = store.put(&scan_report, Utc::now()).await?;
            info!(%location, "report stored");
            scan_report.stored_at = Some(location);
        }

        Ok(scan_report)
    }
}
