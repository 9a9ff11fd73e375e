//! Framework evaluation: route every control through its family checker and
//! score the outcome.

use lens_core::entities::{Control, FrameworkResult, Snapshot};
use lens_core::enums::ComplianceStatus;
use lens_core::round_score;
use tracing::{debug, trace};

use crate::family::{ControlFamily, Severity};

/// Evaluate `controls` of `framework_id` against `snapshot`.
///
/// Controls whose id maps to no [`ControlFamily`] are skipped. The score is
/// `passed / (passed + failed) * 100`, rounded to one decimal; warnings are
/// excluded from both sides, and a framework with no passed or failed
/// controls scores 0.
///
/// Leaving warnings out of the denominator is provisional and not yet a
/// confirmed public contract.
#[must_use]
pub fn evaluate(snapshot: &Snapshot, framework_id: &str, controls: &[Control]) -> FrameworkResult {
    let mut passed_controls = Vec::new();
    let mut failed_controls = Vec::new();
    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();

    for control in controls {
        let Some(family) = ControlFamily::from_control_id(&control.id) else {
            trace!(framework = framework_id, control = %control.id, "control matches no family, skipped");
            continue;
        };

        let verdict = family.check(snapshot);
        if verdict.passed {
            passed_controls.push(verdict.message);
            continue;
        }

        match family.severity() {
            Severity::Failure => failed_controls.push(verdict.message),
            Severity::Warning => warnings.push(verdict.message),
        }
        recommendations.push(verdict.recommendation);
    }

    let score = score(passed_controls.len(), failed_controls.len());
    let status = ComplianceStatus::from_score(score);
    debug!(
        framework = framework_id,
        score,
        %status,
        passed = passed_controls.len(),
        failed = failed_controls.len(),
        warnings = warnings.len(),
        "framework evaluated"
    );

    FrameworkResult {
        framework: framework_id.to_uppercase(),
        score,
        status,
        passed_controls,
        failed_controls,
        warnings,
        recommendations,
    }
}

/// Percentage of passed controls among passed and failed, one decimal.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score(passed: usize, failed: usize) -> f64 {
    let total = passed + failed;
    if total == 0 {
        return 0.0;
    }
    round_score(passed as f64 / total as f64 * 100.0)
}
