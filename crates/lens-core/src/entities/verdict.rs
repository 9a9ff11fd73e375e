use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of checking one control against a snapshot.
///
/// Whether a failing verdict counts as a failure or a warning is decided by
/// the control family that produced it, not by the verdict itself.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub message: String,
    /// Empty when `passed` is true.
    pub recommendation: String,
}

impl Verdict {
    #[must_use]
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            recommendation: String::new(),
        }
    }

    #[must_use]
    pub fn fail(message: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            recommendation: recommendation.into(),
        }
    }
}
