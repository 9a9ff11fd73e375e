//! Control checkers.
//!
//! Each checker is a pure function over one slice of a snapshot and always
//! returns a [`Verdict`]. Missing attributes have already been defaulted by
//! deserialization, so there is nothing here that can fail.

use lens_core::entities::{Cookie, Snapshot, Verdict};

/// Insecure cookie names listed in a secure-flag failure.
const MAX_NAMED_COOKIES: usize = 3;
/// Domains listed in a third-party disclosure warning.
const MAX_NAMED_DOMAINS: usize = 5;

/// Every cookie must carry the `Secure` flag.
#[must_use]
pub fn check_secure_flag(cookies: &[Cookie]) -> Verdict {
    if cookies.is_empty() {
        return Verdict::pass("No cookies found");
    }

    let insecure: Vec<&Cookie> = cookies.iter().filter(|c| !c.secure).collect();
    if insecure.is_empty() {
        return Verdict::pass("All cookies have 'Secure' flag set");
    }

    let names = insecure
        .iter()
        .take(MAX_NAMED_COOKIES)
        .map(|c| c.display_name())
        .collect::<Vec<_>>()
        .join(", ");
    Verdict::fail(
        format!(
            "{} cookie(s) missing 'Secure' flag: {names}",
            insecure.len()
        ),
        "Set 'Secure' flag on all cookies to ensure they're only transmitted over HTTPS",
    )
}

/// Session cookies must carry the `HttpOnly` flag.
///
/// A snapshot without session cookies passes with its own message: having
/// none is not the same as having compliant ones.
#[must_use]
pub fn check_httponly_flag(cookies: &[Cookie]) -> Verdict {
    let session: Vec<&Cookie> = cookies.iter().filter(|c| c.is_session_cookie()).collect();
    if session.is_empty() {
        return Verdict::pass("No session cookies detected");
    }

    let exposed = session.iter().filter(|c| !c.http_only).count();
    if exposed == 0 {
        return Verdict::pass("Session cookies have 'httpOnly' flag set");
    }

    Verdict::fail(
        format!("{exposed} session cookie(s) missing 'httpOnly' flag"),
        "Set 'httpOnly' flag on session cookies to prevent XSS attacks",
    )
}

/// Every cookie should carry a `SameSite` attribute.
#[must_use]
pub fn check_samesite_attribute(cookies: &[Cookie]) -> Verdict {
    if cookies.is_empty() {
        return Verdict::pass("No cookies found");
    }

    let missing = cookies.iter().filter(|c| !c.has_same_site()).count();
    if missing == 0 {
        return Verdict::pass("All cookies have 'sameSite' attribute set");
    }

    Verdict::fail(
        format!("{missing} cookie(s) missing 'sameSite' attribute"),
        "Set 'sameSite' attribute (Lax or Strict) on cookies to prevent CSRF attacks",
    )
}

/// Consent presence.
///
/// Weak heuristic: any cookie at all is taken as evidence that a consent or
/// tracking mechanism is active. It does not look for a banner, a consent
/// cookie, or whether cookies were set before consent.
#[must_use]
pub fn check_consent_mechanism(snapshot: &Snapshot) -> Verdict {
    if snapshot.cookies.is_empty() {
        Verdict::fail(
            "No clear consent mechanism detected",
            "Implement a cookie consent banner to obtain user permission before setting cookies",
        )
    } else {
        Verdict::pass("Cookie consent mechanism detected")
    }
}

/// Third-party services must be disclosed.
///
/// `third_parties` is expected to be free of duplicates, as returned by
/// [`Snapshot::unique_third_parties`].
#[must_use]
pub fn check_third_party_disclosure(third_parties: &[&str]) -> Verdict {
    if third_parties.is_empty() {
        return Verdict::pass("No third-party services detected");
    }

    let named = third_parties
        .iter()
        .take(MAX_NAMED_DOMAINS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    Verdict::fail(
        format!(
            "Detected {} third-party service(s): {named}",
            third_parties.len()
        ),
        format!("Document these third-party services in your privacy policy: {named}"),
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn cookie(name: &str, secure: bool, http_only: bool, same_site: Option<&str>) -> Cookie {
        Cookie {
            secure,
            http_only,
            same_site: same_site.map(str::to_string),
            ..Cookie::named(name)
        }
    }

    #[test]
    fn secure_passes_without_cookies() {
        let verdict = check_secure_flag(&[]);
        assert!(verdict.passed);
        assert_eq!(verdict.message, "No cookies found");
        assert!(verdict.recommendation.is_empty());
    }

    #[test]
    fn secure_passes_when_all_secure() {
        let verdict = check_secure_flag(&[cookie("a", true, false, None)]);
        assert!(verdict.passed);
        assert_eq!(verdict.message, "All cookies have 'Secure' flag set");
    }

    #[test]
    fn secure_failure_names_first_three() {
        let cookies = vec![
            cookie("one", false, false, None),
            cookie("safe", true, false, None),
            cookie("two", false, false, None),
            cookie("three", false, false, None),
            cookie("four", false, false, None),
        ];
        let verdict = check_secure_flag(&cookies);
        assert!(!verdict.passed);
        assert_eq!(
            verdict.message,
            "4 cookie(s) missing 'Secure' flag: one, two, three"
        );
        assert!(verdict.recommendation.contains("Secure"));
    }

    #[test]
    fn secure_failure_names_unnamed_cookie_as_unknown() {
        let verdict = check_secure_flag(&[cookie("", false, false, None)]);
        assert_eq!(verdict.message, "1 cookie(s) missing 'Secure' flag: unknown");
    }

    #[test]
    fn httponly_without_session_cookies_has_distinct_message() {
        let verdict = check_httponly_flag(&[cookie("_ga", false, false, None)]);
        assert!(verdict.passed);
        assert_eq!(verdict.message, "No session cookies detected");

        let verdict = check_httponly_flag(&[cookie("session_id", false, true, None)]);
        assert!(verdict.passed);
        assert_eq!(verdict.message, "Session cookies have 'httpOnly' flag set");
    }

    #[test]
    fn httponly_counts_only_session_violators() {
        let cookies = vec![
            cookie("session_id", true, false, None),
            cookie("AUTH_TOKEN", true, false, None),
            cookie("sessionPref", true, true, None),
            cookie("_ga", true, false, None),
        ];
        let verdict = check_httponly_flag(&cookies);
        assert!(!verdict.passed);
        assert_eq!(verdict.message, "2 session cookie(s) missing 'httpOnly' flag");
    }

    #[test]
    fn samesite_reports_missing_count() {
        assert!(check_samesite_attribute(&[]).passed);
        assert!(check_samesite_attribute(&[cookie("a", false, false, Some("Strict"))]).passed);

        let verdict = check_samesite_attribute(&[
            cookie("a", false, false, Some("Lax")),
            cookie("b", false, false, None),
            cookie("c", false, false, Some("")),
        ]);
        assert!(!verdict.passed);
        assert_eq!(verdict.message, "2 cookie(s) missing 'sameSite' attribute");
    }

    #[test]
    fn consent_follows_cookie_presence() {
        let mut snapshot = Snapshot::new("https://a.test", Utc::now());
        let verdict = check_consent_mechanism(&snapshot);
        assert!(!verdict.passed);
        assert!(!verdict.recommendation.is_empty());

        snapshot.cookies.push(cookie("a", false, false, None));
        let verdict = check_consent_mechanism(&snapshot);
        assert!(verdict.passed);
        assert_eq!(verdict.message, "Cookie consent mechanism detected");
    }

    #[test]
    fn third_party_warning_names_first_five() {
        assert!(check_third_party_disclosure(&[]).passed);

        let domains: Vec<String> = (1..=7).map(|i| format!("t{i}.test")).collect();
        let domains: Vec<&str> = domains.iter().map(String::as_str).collect();
        let verdict = check_third_party_disclosure(&domains);
        assert!(!verdict.passed);
        assert_eq!(
            verdict.message,
            "Detected 7 third-party service(s): t1.test, t2.test, t3.test, t4.test, t5.test"
        );
        assert_eq!(
            verdict.recommendation,
            "Document these third-party services in your privacy policy: t1.test, t2.test, t3.test, t4.test, t5.test"
        );
    }
}
