//! Control families.
//!
//! A control is routed to a checker by its id. The id is lowercased and
//! tested against each family's keyword in [`ControlFamily::ALL`] order; the
//! first hit wins, so `consent-secure-cookies` is a consent control and never
//! a secure-flag one.

use std::fmt;

use lens_core::entities::{Snapshot, Verdict};

use crate::checks;

/// The closed set of checks a control can map to, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlFamily {
    Consent,
    SecureFlag,
    HttpOnly,
    SameSite,
    ThirdPartyDisclosure,
}

/// How a failing verdict of a family is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Counted in `failed_controls` and the score denominator.
    Failure,
    /// Counted in `warnings`; never affects the score.
    Warning,
}

impl ControlFamily {
    /// Every family, in match priority order.
    pub const ALL: [Self; 5] = [
        Self::Consent,
        Self::SecureFlag,
        Self::HttpOnly,
        Self::SameSite,
        Self::ThirdPartyDisclosure,
    ];

    /// Keyword a control id must contain to belong to this family.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Consent => "consent",
            Self::SecureFlag => "secure",
            Self::HttpOnly => "httponly",
            Self::SameSite => "samesite",
            Self::ThirdPartyDisclosure => "third-party",
        }
    }

    /// Family of the control with id `control_id`, if any.
    #[must_use]
    pub fn from_control_id(control_id: &str) -> Option<Self> {
        let id = control_id.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|family| id.contains(family.keyword()))
    }

    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::Consent | Self::SecureFlag | Self::HttpOnly => Severity::Failure,
            Self::SameSite | Self::ThirdPartyDisclosure => Severity::Warning,
        }
    }

    /// Run this family's checker against `snapshot`.
    #[must_use]
    pub fn check(self, snapshot: &Snapshot) -> Verdict {
        match self {
            Self::Consent => checks::check_consent_mechanism(snapshot),
            Self::SecureFlag => checks::check_secure_flag(&snapshot.cookies),
            Self::HttpOnly => checks::check_httponly_flag(&snapshot.cookies),
            Self::SameSite => checks::check_samesite_attribute(&snapshot.cookies),
            Self::ThirdPartyDisclosure => {
                checks::check_third_party_disclosure(&snapshot.unique_third_parties())
            }
        }
    }
}

impl fmt::Display for ControlFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
