//! Third-party tracker classification.
//!
//! A domain is matched against an ordered rule table by plain substring
//! containment (case-sensitive, not a suffix match). The first matching rule
//! wins. Domains no rule matches are `Unknown` with `medium` risk.

use lens_core::entities::ThirdPartyRisk;
use lens_core::enums::{RiskLevel, TrackerCategory};

/// One classification rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerRule {
    pub pattern: String,
    pub category: TrackerCategory,
    pub risk_level: RiskLevel,
}

impl TrackerRule {
    #[must_use]
    pub fn new(pattern: impl Into<String>, category: TrackerCategory, risk_level: RiskLevel) -> Self {
        Self {
            pattern: pattern.into(),
            category,
            risk_level,
        }
    }
}

/// Built-in rules, in match order.
pub const BUILTIN_RULES: &[(&str, TrackerCategory, RiskLevel)] = &[
    ("google-analytics", TrackerCategory::Analytics, RiskLevel::Low),
    ("googletagmanager", TrackerCategory::Analytics, RiskLevel::Low),
    ("facebook", TrackerCategory::Advertising, RiskLevel::Medium),
    ("doubleclick", TrackerCategory::Advertising, RiskLevel::Medium),
    ("cloudflare", TrackerCategory::Cdn, RiskLevel::Low),
    ("cloudfront", TrackerCategory::Cdn, RiskLevel::Low),
];

/// Classification for domains no rule matches.
pub const UNMATCHED: (TrackerCategory, RiskLevel) = (TrackerCategory::Unknown, RiskLevel::Medium);

/// Classify `domain` against the built-in rules only.
#[must_use]
pub fn classify(domain: &str) -> (TrackerCategory, RiskLevel) {
    BUILTIN_RULES
        .iter()
        .find(|(pattern, _, _)| domain.contains(pattern))
        .map_or(UNMATCHED, |(_, category, risk)| (*category, *risk))
}

/// Classifier with optional extra rules consulted before the built-in table.
#[derive(Debug, Clone, Default)]
pub struct TrackerClassifier {
    extra_rules: Vec<TrackerRule>,
}

impl TrackerClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rules that take precedence over the built-in table, in the given order.
    #[must_use]
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = TrackerRule>) -> Self {
        self.extra_rules.extend(rules);
        self
    }

    #[must_use]
    pub fn classify(&self, domain: &str) -> (TrackerCategory, RiskLevel) {
        self.extra_rules
            .iter()
            .find(|rule| !rule.pattern.is_empty() && domain.contains(rule.pattern.as_str()))
            .map_or_else(|| classify(domain), |rule| (rule.category, rule.risk_level))
    }

    /// Classify `domain` into a [`ThirdPartyRisk`] entry.
    #[must_use]
    pub fn assess(&self, domain: &str) -> ThirdPartyRisk {
        let (category, risk_level) = self.classify(domain);
        ThirdPartyRisk {
            domain: domain.to_string(),
            category,
            risk_level,
            recommendation: format!("Review data processing agreement with {domain}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("www.google-analytics.com", TrackerCategory::Analytics, RiskLevel::Low)]
    #[case("googletagmanager.com", TrackerCategory::Analytics, RiskLevel::Low)]
    #[case("connect.facebook.net", TrackerCategory::Advertising, RiskLevel::Medium)]
    #[case("googleads.g.doubleclick.net", TrackerCategory::Advertising, RiskLevel::Medium)]
    #[case("cdnjs.cloudflare.com", TrackerCategory::Cdn, RiskLevel::Low)]
    #[case("d111111abcdef8.cloudfront.net", TrackerCategory::Cdn, RiskLevel::Low)]
    #[case("unknown-tracker.xyz", TrackerCategory::Unknown, RiskLevel::Medium)]
    fn classifies_builtin_patterns(
        #[case] domain: &str,
        #[case] category: TrackerCategory,
        #[case] risk: RiskLevel,
    ) {
        assert_eq!(classify(domain), (category, risk));
    }

    #[test]
    fn matching_is_containment_not_suffix() {
        assert_eq!(
            classify("facebook.evil.example"),
            (TrackerCategory::Advertising, RiskLevel::Medium)
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(classify("Connect.FACEBOOK.net"), UNMATCHED);
    }

    #[test]
    fn first_matching_rule_wins() {
        // Contains both "googletagmanager" and "facebook".
        assert_eq!(
            classify("googletagmanager.facebook.test"),
            (TrackerCategory::Analytics, RiskLevel::Low)
        );
    }

    #[test]
    fn extra_rules_take_precedence() {
        let classifier = TrackerClassifier::new().with_rules([TrackerRule::new(
            "facebook",
            TrackerCategory::Advertising,
            RiskLevel::High,
        )]);
        assert_eq!(
            classifier.classify("connect.facebook.net"),
            (TrackerCategory::Advertising, RiskLevel::High)
        );
        assert_eq!(
            classifier.classify("cdnjs.cloudflare.com"),
            (TrackerCategory::Cdn, RiskLevel::Low)
        );
    }

    #[test]
    fn empty_extra_pattern_never_matches() {
        let classifier = TrackerClassifier::new().with_rules([TrackerRule::new(
            "",
            TrackerCategory::Analytics,
            RiskLevel::High,
        )]);
        assert_eq!(classifier.classify("unknown-tracker.xyz"), UNMATCHED);
    }

    #[test]
    fn assess_builds_recommendation() {
        let risk = TrackerClassifier::new().assess("facebook.com");
        assert_eq!(risk.domain, "facebook.com");
        assert_eq!(risk.category, TrackerCategory::Advertising);
        assert_eq!(risk.risk_level, RiskLevel::Medium);
        assert_eq!(risk.recommendation, "Review data processing agreement with facebook.com");
    }
}
