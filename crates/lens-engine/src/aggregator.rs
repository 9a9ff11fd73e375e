//! Aggregation of framework results, tracker risks, and the overall summary
//! into one [`Report`].

use lens_core::entities::{
    Control, FrameworkResult, FrameworkResults, OverallSummary, Report, Snapshot, ThirdPartyRisk,
};
use lens_core::{ControlSource, round_score};
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::classifier::TrackerClassifier;
use crate::error::EngineError;
use crate::evaluator::evaluate;

/// Frameworks evaluated when the caller names none.
pub const DEFAULT_FRAMEWORKS: [&str; 2] = ["gdpr", "ccpa"];

/// Evaluates snapshots against the frameworks of a [`ControlSource`].
///
/// Holds no per-call state: one aggregator can serve any number of
/// concurrent evaluations.
#[derive(Debug, Clone)]
pub struct Aggregator<S> {
    source: S,
    classifier: TrackerClassifier,
}

impl<S: ControlSource> Aggregator<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            classifier: TrackerClassifier::new(),
        }
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: TrackerClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    pub const fn classifier(&self) -> &TrackerClassifier {
        &self.classifier
    }

    /// Evaluate `snapshot` against `framework_ids`, or [`DEFAULT_FRAMEWORKS`]
    /// when `None`.
    ///
    /// Frameworks are evaluated in parallel; the result mapping keeps the
    /// requested order. Frameworks the source does not know are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ControlSource`] if the source fails for any
    /// requested framework.
    #[instrument(skip_all, fields(url = %snapshot.url))]
    pub fn aggregate(
        &self,
        snapshot: &Snapshot,
        framework_ids: Option<&[String]>,
    ) -> Result<Report, EngineError> {
        let requested: Vec<&str> = framework_ids.map_or_else(
            || DEFAULT_FRAMEWORKS.to_vec(),
            |ids| ids.iter().map(String::as_str).collect(),
        );

        let evaluated = requested
            .par_iter()
            .map(|&framework_id| self.evaluate_framework(snapshot, framework_id))
            .collect::<Result<Vec<_>, _>>()?;

        let compliance_analysis: FrameworkResults = evaluated.into_iter().flatten().collect();
        let third_party_risks = self.third_party_risks(snapshot);
        let overall_summary = summarize(&compliance_analysis);

        debug!(
            frameworks = overall_summary.frameworks_analyzed,
            overall_score = overall_summary.overall_score,
            third_parties = third_party_risks.len(),
            "snapshot aggregated"
        );

        Ok(Report {
            scan_results: snapshot.clone(),
            compliance_analysis,
            third_party_risks,
            overall_summary,
        })
    }

    fn evaluate_framework(
        &self,
        snapshot: &Snapshot,
        framework_id: &str,
    ) -> Result<Option<(String, FrameworkResult)>, EngineError> {
        let Some(controls) = self.source.controls(framework_id)? else {
            debug!(framework = framework_id, "unknown framework, skipped");
            return Ok(None);
        };

        let controls: Vec<Control> = controls
            .into_iter()
            .filter(|control| control.category.is_evaluated())
            .collect();
        let result = evaluate(snapshot, framework_id, &controls);
        Ok(Some((framework_id.to_string(), result)))
    }

    /// One risk per distinct third-party host, in first-seen order.
    #[must_use]
    pub fn third_party_risks(&self, snapshot: &Snapshot) -> Vec<ThirdPartyRisk> {
        snapshot
            .unique_third_parties()
            .into_iter()
            .map(|domain| self.classifier.assess(domain))
            .collect()
    }
}

/// Roll up framework results into an [`OverallSummary`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(results: &FrameworkResults) -> OverallSummary {
    let frameworks_analyzed = results.len();
    let overall_score = if frameworks_analyzed == 0 {
        0.0
    } else {
        round_score(results.values().map(|r| r.score).sum::<f64>() / frameworks_analyzed as f64)
    };

    OverallSummary {
        overall_score,
        total_passed: results.values().map(FrameworkResult::passed_count).sum(),
        total_failed: results.values().map(FrameworkResult::failed_count).sum(),
        total_warnings: results.values().map(FrameworkResult::warning_count).sum(),
        frameworks_analyzed,
    }
}
