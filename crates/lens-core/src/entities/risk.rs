use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{RiskLevel, TrackerCategory};

/// Categorized exposure from one external domain contacted during a scan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ThirdPartyRisk {
    pub domain: String,
    pub category: TrackerCategory,
    pub risk_level: RiskLevel,
    pub recommendation: String,
}
