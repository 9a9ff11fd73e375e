//! Extra tracker classification rules.

use lens_core::enums::{RiskLevel, TrackerCategory};
use serde::{Deserialize, Serialize};

/// One `[[classifier.rules]]` entry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ClassifierRuleConfig {
    /// Substring a third-party host must contain.
    pub pattern: String,
    pub category: TrackerCategory,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Rules consulted before the built-in table, in order.
    #[serde(default)]
    pub rules: Vec<ClassifierRuleConfig>,
}
