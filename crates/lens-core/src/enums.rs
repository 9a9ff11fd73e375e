//! Status, risk, and category enums for CookieLens.
//!
//! Enums serialize to the exact strings the report format uses. Status and
//! risk tiers are `snake_case`; tracker categories keep their display casing
//! (`Analytics`, `CDN`, ...).

use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ComplianceStatus
// ---------------------------------------------------------------------------

/// Compliance tier derived from a framework score.
///
/// ```text
/// score >= 80        → compliant
/// 60 <= score < 80   → needs_improvement
/// score < 60         → non_compliant
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    NeedsImprovement,
    NonCompliant,
}

impl ComplianceStatus {
    /// Lower bound (inclusive) of the `compliant` tier.
    pub const COMPLIANT_THRESHOLD: f64 = 80.0;
    /// Lower bound (inclusive) of the `needs_improvement` tier.
    pub const NEEDS_IMPROVEMENT_THRESHOLD: f64 = 60.0;

    /// Map a score in `[0, 100]` to its tier.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= Self::COMPLIANT_THRESHOLD {
            Self::Compliant
        } else if score >= Self::NEEDS_IMPROVEMENT_THRESHOLD {
            Self::NeedsImprovement
        } else {
            Self::NonCompliant
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::NeedsImprovement => "needs_improvement",
            Self::NonCompliant => "non_compliant",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Risk tier assigned to a third-party domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TrackerCategory
// ---------------------------------------------------------------------------

/// What kind of service a third-party domain belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TrackerCategory {
    Analytics,
    Advertising,
    #[serde(rename = "CDN")]
    Cdn,
    Unknown,
}

impl TrackerCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::Advertising => "Advertising",
            Self::Cdn => "CDN",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TrackerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ControlCategory
// ---------------------------------------------------------------------------

/// Category of a compliance control.
///
/// Catalogs may carry categories the engine does not evaluate; those are
/// preserved verbatim in [`ControlCategory::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ControlCategory {
    Privacy,
    Security,
    Other(String),
}

impl ControlCategory {
    /// Whether the engine evaluates controls of this category.
    #[must_use]
    pub const fn is_evaluated(&self) -> bool {
        matches!(self, Self::Privacy | Self::Security)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Privacy => "Privacy",
            Self::Security => "Security",
            Self::Other(other) => other,
        }
    }
}

impl Default for ControlCategory {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for ControlCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Privacy" => Self::Privacy,
            "Security" => Self::Security,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for ControlCategory {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ControlCategory> for String {
    fn from(value: ControlCategory) -> Self {
        match value {
            ControlCategory::Privacy => Self::from("Privacy"),
            ControlCategory::Security => Self::from("Security"),
            ControlCategory::Other(other) => other,
        }
    }
}

impl fmt::Display for ControlCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for ControlCategory {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("ControlCategory")
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        String::json_schema(generator)
    }
}
