//! End-to-end engine behavior over a fixture control source.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use lens_core::entities::{Control, Cookie, Snapshot};
use lens_core::enums::{ComplianceStatus, RiskLevel, TrackerCategory};
use lens_core::{ControlSource, SourceError};
use lens_engine::{Aggregator, DEFAULT_FRAMEWORKS, EngineError};
use pretty_assertions::assert_eq;

/// In-memory control source that records every lookup.
#[derive(Default)]
struct FixtureSource {
    frameworks: HashMap<String, Vec<Control>>,
    failing: Option<String>,
    lookups: Mutex<Vec<String>>,
}

impl FixtureSource {
    fn with(mut self, framework_id: &str, controls: Vec<Control>) -> Self {
        self.frameworks.insert(framework_id.to_string(), controls);
        self
    }

    fn failing_on(mut self, framework_id: &str) -> Self {
        self.failing = Some(framework_id.to_string());
        self
    }

    fn lookups(&self) -> Vec<String> {
        let mut lookups = self.lookups.lock().unwrap().clone();
        lookups.sort();
        lookups
    }
}

impl ControlSource for FixtureSource {
    fn controls(&self, framework_id: &str) -> Result<Option<Vec<Control>>, SourceError> {
        self.lookups.lock().unwrap().push(framework_id.to_string());
        if self.failing.as_deref() == Some(framework_id) {
            return Err(SourceError::Unavailable {
                framework: framework_id.to_string(),
                reason: "connection refused".into(),
            });
        }
        Ok(self.frameworks.get(framework_id).cloned())
    }
}

fn privacy_controls(prefix: &str) -> Vec<Control> {
    [
        "consent",
        "secure-transmission",
        "httponly",
        "samesite",
        "third-party",
    ]
    .iter()
    .map(|suffix| Control::new(format!("{prefix}-{suffix}"), *suffix, "Privacy"))
    .collect()
}

fn snapshot(cookies: Vec<Cookie>, third_parties: &[&str]) -> Snapshot {
    let mut snapshot = Snapshot::new(
        "https://shop.example",
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap(),
    );
    snapshot.cookies = cookies;
    snapshot.third_parties = third_parties.iter().map(ToString::to_string).collect();
    snapshot
}

fn hardened(name: &str) -> Cookie {
    Cookie {
        secure: true,
        http_only: true,
        same_site: Some("Lax".into()),
        ..Cookie::named(name)
    }
}

fn source() -> FixtureSource {
    FixtureSource::default()
        .with("gdpr", privacy_controls("gdpr"))
        .with("ccpa", privacy_controls("ccpa"))
        .with("soc2", Vec::new())
}

#[test]
fn scenario_single_hardened_cookie_with_facebook() {
    let aggregator = Aggregator::new(source());
    let snapshot = snapshot(vec![hardened("a")], &["facebook.com"]);
    let frameworks = vec!["gdpr".to_string()];

    let report = aggregator.aggregate(&snapshot, Some(&frameworks)).unwrap();

    let gdpr = report.compliance_analysis.get("gdpr").unwrap();
    assert_eq!(
        gdpr.passed_controls,
        vec![
            "Cookie consent mechanism detected",
            "All cookies have 'Secure' flag set",
            "No session cookies detected",
            "All cookies have 'sameSite' attribute set",
        ]
    );
    assert!(gdpr.failed_controls.is_empty());
    assert_eq!(
        gdpr.warnings,
        vec!["Detected 1 third-party service(s): facebook.com"]
    );
    assert_eq!(gdpr.recommendations.len(), 1);
    assert!((gdpr.score - 100.0).abs() < f64::EPSILON);
    assert_eq!(gdpr.status, ComplianceStatus::Compliant);

    assert_eq!(report.third_party_risks.len(), 1);
    assert_eq!(report.third_party_risks[0].domain, "facebook.com");
    assert_eq!(report.third_party_risks[0].category, TrackerCategory::Advertising);
    assert_eq!(report.third_party_risks[0].risk_level, RiskLevel::Medium);

    assert_eq!(report.overall_summary.total_passed, 4);
    assert_eq!(report.overall_summary.total_failed, 0);
    assert_eq!(report.overall_summary.total_warnings, 1);
    assert_eq!(report.overall_summary.frameworks_analyzed, 1);
}

#[test]
fn defaults_to_gdpr_then_ccpa() {
    let source = source();
    let aggregator = Aggregator::new(&source);
    let report = aggregator.aggregate(&snapshot(vec![], &[]), None).unwrap();

    let keys: Vec<&str> = report.compliance_analysis.keys().collect();
    assert_eq!(keys, DEFAULT_FRAMEWORKS.to_vec());
    assert_eq!(source.lookups(), vec!["ccpa", "gdpr"]);
}

#[test]
fn output_follows_requested_order_not_completion_order() {
    let aggregator = Aggregator::new(source());
    let frameworks: Vec<String> = ["soc2", "ccpa", "gdpr"].map(String::from).to_vec();
    let report = aggregator
        .aggregate(&snapshot(vec![hardened("a")], &[]), Some(&frameworks))
        .unwrap();

    let keys: Vec<&str> = report.compliance_analysis.keys().collect();
    assert_eq!(keys, vec!["soc2", "ccpa", "gdpr"]);
}

#[test]
fn empty_cookie_snapshot_passes_secure_and_samesite_but_fails_consent() {
    let aggregator = Aggregator::new(source());
    let frameworks = vec!["gdpr".to_string()];
    let report = aggregator
        .aggregate(&snapshot(vec![], &[]), Some(&frameworks))
        .unwrap();

    let gdpr = report.compliance_analysis.get("gdpr").unwrap();
    assert_eq!(
        gdpr.passed_controls,
        vec![
            "No cookies found",
            "No session cookies detected",
            "No cookies found",
            "No third-party services detected",
        ]
    );
    assert_eq!(gdpr.failed_controls, vec!["No clear consent mechanism detected"]);
    assert!((gdpr.score - 80.0).abs() < f64::EPSILON);
    assert_eq!(gdpr.status, ComplianceStatus::Compliant);
}

#[test]
fn session_cookie_without_httponly_fails_only_httponly() {
    let aggregator = Aggregator::new(source());
    let cookie = Cookie {
        http_only: false,
        ..hardened("session_id")
    };
    let frameworks = vec!["gdpr".to_string()];
    let report = aggregator
        .aggregate(&snapshot(vec![cookie], &[]), Some(&frameworks))
        .unwrap();

    let gdpr = report.compliance_analysis.get("gdpr").unwrap();
    assert_eq!(
        gdpr.failed_controls,
        vec!["1 session cookie(s) missing 'httpOnly' flag"]
    );
    assert!(gdpr.warnings.is_empty());
    assert!(gdpr.passed_controls.contains(&"All cookies have 'Secure' flag set".to_string()));
    assert!(
        gdpr.passed_controls
            .contains(&"All cookies have 'sameSite' attribute set".to_string())
    );
}

#[test]
fn known_framework_without_controls_scores_zero() {
    let aggregator = Aggregator::new(source());
    let frameworks = vec!["soc2".to_string()];
    let report = aggregator
        .aggregate(&snapshot(vec![hardened("a")], &[]), Some(&frameworks))
        .unwrap();

    let soc2 = report.compliance_analysis.get("soc2").unwrap();
    assert!(soc2.score.abs() < f64::EPSILON);
    assert_eq!(soc2.status, ComplianceStatus::NonCompliant);
    assert!(soc2.passed_controls.is_empty());
    assert!(soc2.failed_controls.is_empty());
    assert!(soc2.warnings.is_empty());
}

#[test]
fn warnings_alone_score_zero() {
    // Known edge case: warnings never enter the denominator, so a framework
    // made only of warning-severity controls cannot score above 0.
    let source = FixtureSource::default().with(
        "lite",
        vec![
            Control::new("lite-samesite", "SameSite", "Security"),
            Control::new("lite-third-party", "Disclosure", "Privacy"),
        ],
    );
    let frameworks = vec!["lite".to_string()];
    let report = Aggregator::new(source)
        .aggregate(&snapshot(vec![Cookie::named("a")], &["t.test"]), Some(&frameworks))
        .unwrap();

    let lite = report.compliance_analysis.get("lite").unwrap();
    assert_eq!(lite.warnings.len(), 2);
    assert_eq!(lite.recommendations.len(), 2);
    assert!(lite.score.abs() < f64::EPSILON);
    assert_eq!(lite.status, ComplianceStatus::NonCompliant);
}

#[test]
fn unknown_frameworks_are_skipped() {
    let aggregator = Aggregator::new(source());
    let frameworks: Vec<String> = ["hipaa", "gdpr"].map(String::from).to_vec();
    let report = aggregator
        .aggregate(&snapshot(vec![], &[]), Some(&frameworks))
        .unwrap();

    let keys: Vec<&str> = report.compliance_analysis.keys().collect();
    assert_eq!(keys, vec!["gdpr"]);
    assert_eq!(report.overall_summary.frameworks_analyzed, 1);
}

#[test]
fn nothing_evaluated_gives_zero_summary() {
    let aggregator = Aggregator::new(FixtureSource::default());
    let report = aggregator.aggregate(&snapshot(vec![], &[]), None).unwrap();

    assert!(report.compliance_analysis.is_empty());
    assert!(report.overall_summary.overall_score.abs() < f64::EPSILON);
    assert_eq!(report.overall_summary.frameworks_analyzed, 0);
}

#[test]
fn non_privacy_categories_are_ignored() {
    let source = FixtureSource::default().with(
        "mixed",
        vec![
            Control::new("mixed-secure", "Secure", "Operations"),
            Control::new("mixed-consent", "Consent", "Privacy"),
        ],
    );
    let frameworks = vec!["mixed".to_string()];
    let report = Aggregator::new(source)
        .aggregate(&snapshot(vec![Cookie::named("a")], &[]), Some(&frameworks))
        .unwrap();

    let mixed = report.compliance_analysis.get("mixed").unwrap();
    assert_eq!(mixed.passed_controls, vec!["Cookie consent mechanism detected"]);
    assert!(mixed.failed_controls.is_empty());
}

#[test]
fn overall_score_is_mean_of_framework_scores() {
    let source = FixtureSource::default()
        .with("full", privacy_controls("full"))
        .with("none", Vec::new());
    let frameworks: Vec<String> = ["full", "none"].map(String::from).to_vec();
    let insecure = Cookie::named("session_token");
    let report = Aggregator::new(source)
        .aggregate(&snapshot(vec![insecure], &[]), Some(&frameworks))
        .unwrap();

    // full: consent and disclosure pass, secure and httponly fail -> 2/4
    let full = report.compliance_analysis.get("full").unwrap();
    assert!((full.score - 50.0).abs() < f64::EPSILON);
    assert_eq!(full.warnings.len(), 1);
    assert!((report.overall_summary.overall_score - 25.0).abs() < f64::EPSILON);
    assert_eq!(report.overall_summary.total_failed, 2);
    assert_eq!(report.overall_summary.total_warnings, 1);
}

#[test]
fn third_party_risks_follow_first_seen_order_without_duplicates() {
    let aggregator = Aggregator::new(source());
    let report = aggregator
        .aggregate(
            &snapshot(
                vec![],
                &["googletagmanager.com", "unknown-tracker.xyz", "googletagmanager.com"],
            ),
            None,
        )
        .unwrap();

    let classified: Vec<_> = report
        .third_party_risks
        .iter()
        .map(|r| (r.domain.as_str(), r.category, r.risk_level))
        .collect();
    assert_eq!(
        classified,
        vec![
            ("googletagmanager.com", TrackerCategory::Analytics, RiskLevel::Low),
            ("unknown-tracker.xyz", TrackerCategory::Unknown, RiskLevel::Medium),
        ]
    );
}

#[test]
fn evaluation_is_idempotent_and_leaves_snapshot_untouched() {
    let aggregator = Aggregator::new(source());
    let snapshot = snapshot(
        vec![hardened("a"), Cookie::named("session_id")],
        &["connect.facebook.net", "cdn.example"],
    );
    let before = snapshot.clone();

    let first = serde_json::to_string(&aggregator.aggregate(&snapshot, None).unwrap()).unwrap();
    let second = serde_json::to_string(&aggregator.aggregate(&snapshot, None).unwrap()).unwrap();

    assert_eq!(first, second);
    assert_eq!(snapshot, before);
}

#[test]
fn scores_stay_within_bounds() {
    let aggregator = Aggregator::new(source());
    let cases = vec![
        vec![],
        vec![hardened("a")],
        vec![Cookie::named("session")],
        vec![hardened("auth"), Cookie::named("x"), Cookie::named("sessionid")],
    ];
    for cookies in cases {
        let report = aggregator
            .aggregate(&snapshot(cookies, &["t.test"]), None)
            .unwrap();
        for result in report.compliance_analysis.values() {
            assert!((0.0..=100.0).contains(&result.score), "{}", result.score);
        }
    }
}

#[test]
fn control_source_failure_propagates() {
    let aggregator = Aggregator::new(source().failing_on("ccpa"));
    let err = aggregator
        .aggregate(&snapshot(vec![], &[]), None)
        .unwrap_err();

    assert!(matches!(
        err,
        EngineError::ControlSource(SourceError::Unavailable { ref framework, .. }) if framework == "ccpa"
    ));
    assert!(err.to_string().contains("connection refused"));
}
