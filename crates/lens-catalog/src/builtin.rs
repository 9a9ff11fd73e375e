//! The catalog shipped with CookieLens.

use lens_core::entities::Control;

use crate::catalog::Framework;

/// GDPR, CCPA and SOC 2, in that order.
///
/// SOC 2 is listed so it can be requested, but carries no cookie-level
/// controls and therefore always scores 0.
#[must_use]
pub fn frameworks() -> Vec<Framework> {
    vec![gdpr(), ccpa(), soc2()]
}

fn gdpr() -> Framework {
    Framework {
        id: "gdpr".into(),
        name: "GDPR".into(),
        description: "General Data Protection Regulation".into(),
        controls: vec![
            Control::new("gdpr-consent", "User Consent Management", "Privacy")
                .with_description("Obtain explicit consent before processing personal data")
                .with_requirement("Cookies must not be set without user consent"),
            Control::new("gdpr-secure-transmission", "Secure Data Transmission", "Security")
                .with_description("Ensure data is transmitted securely")
                .with_requirement("All cookies must have 'Secure' flag set"),
            Control::new("gdpr-httponly", "Protection Against XSS", "Security")
                .with_description("Prevent client-side script access to sensitive cookies")
                .with_requirement("Session cookies must have 'httpOnly' flag set"),
            Control::new("gdpr-samesite", "CSRF Protection", "Security")
                .with_description("Protect against cross-site request forgery")
                .with_requirement("Cookies should have 'sameSite' attribute set"),
            Control::new("gdpr-third-party", "Third-Party Data Processing", "Privacy")
                .with_description("Document and control third-party data processors")
                .with_requirement("All third-party services must be documented"),
        ],
    }
}

fn ccpa() -> Framework {
    Framework {
        id: "ccpa".into(),
        name: "CCPA".into(),
        description: "California Consumer Privacy Act".into(),
        controls: vec![
            Control::new("ccpa-consent", "User Consent Management", "Privacy")
                .with_description("Inform users about data collection and obtain consent")
                .with_requirement("Privacy policy and consent mechanism must be present"),
            Control::new("ccpa-secure-transmission", "Secure Data Transmission", "Security")
                .with_description("Ensure consumer data is transmitted securely")
                .with_requirement("All cookies must have 'Secure' flag set"),
            Control::new("ccpa-disclosure", "Privacy Policy Disclosure", "Privacy")
                .with_description("Inform users about data collection practices")
                .with_requirement("Privacy policy must be accessible"),
            Control::new("ccpa-opt-out", "Right to Opt-Out", "Privacy")
                .with_description("Provide mechanism for users to opt-out of data sale")
                .with_requirement("Cookie banner must offer opt-out options"),
            Control::new("ccpa-third-party", "Third-Party Disclosure", "Privacy")
                .with_description("Disclose third parties with whom data is shared")
                .with_requirement("List all third-party services in privacy policy"),
        ],
    }
}

fn soc2() -> Framework {
    Framework {
        id: "soc2".into(),
        name: "SOC 2".into(),
        description: "Service Organization Control 2".into(),
        controls: Vec::new(),
    }
}
