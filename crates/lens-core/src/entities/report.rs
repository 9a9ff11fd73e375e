use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{FrameworkResults, Snapshot, ThirdPartyRisk};

/// Roll-up across every evaluated framework.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OverallSummary {
    /// Mean framework score, rounded to one decimal. 0 when nothing was evaluated.
    pub overall_score: f64,
    pub total_passed: usize,
    pub total_failed: usize,
    pub total_warnings: usize,
    pub frameworks_analyzed: usize,
}

/// Complete engine output for one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Report {
    /// The evaluated snapshot, passed through unchanged.
    pub scan_results: Snapshot,
    pub compliance_analysis: FrameworkResults,
    pub third_party_risks: Vec<ThirdPartyRisk>,
    pub overall_summary: OverallSummary,
}

/// A [`Report`] plus the outputs of the optional workflow collaborators.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ScanReport {
    #[serde(flatten)]
    pub report: Report,
    /// Free-text commentary, or a failure placeholder when generation failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    /// Location of the persisted copy, when the report was stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored_at: Option<String>,
}

impl ScanReport {
    #[must_use]
    pub const fn new(report: Report) -> Self {
        Self {
            report,
            narrative: None,
            stored_at: None,
        }
    }
}
