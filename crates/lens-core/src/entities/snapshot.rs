use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::lenient;

/// One cookie observed during a scan.
///
/// Missing or `null` attributes fall back to their defaults: `secure` and
/// `httpOnly` are false, `sameSite` is "not set".
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cookie {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub name: String,
    #[serde(
        default,
        deserialize_with = "lenient::null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub value: String,
    #[serde(
        default,
        deserialize_with = "lenient::blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub domain: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<f64>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub secure: bool,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub http_only: bool,
    #[serde(default, deserialize_with = "lenient::blank_as_none")]
    pub same_site: Option<String>,
}

impl Cookie {
    /// Cookie with the given name and every attribute unset.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Name heuristic: `session` or `auth` anywhere in the name, any case.
    ///
    /// This is a guess, not a guarantee. Session cookies with opaque names
    /// (e.g. `sid`) are not detected.
    #[must_use]
    pub fn is_session_cookie(&self) -> bool {
        let name = self.name.to_lowercase();
        name.contains("session") || name.contains("auth")
    }

    /// Whether a non-empty `SameSite` attribute is present.
    #[must_use]
    pub fn has_same_site(&self) -> bool {
        self.same_site
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty())
    }

    /// Name used in human-readable messages.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "unknown"
        } else {
            &self.name
        }
    }
}

/// Client-side state captured by one scan of one URL.
///
/// Immutable once produced: the engine only ever borrows it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub url: String,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub scanned_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub cookies: Vec<Cookie>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub local_storage: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub third_parties: Vec<String>,
}

impl Snapshot {
    /// Empty snapshot of `url` taken at `scanned_at`.
    #[must_use]
    pub fn new(url: impl Into<String>, scanned_at: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            scanned_at,
            cookies: Vec::new(),
            local_storage: BTreeMap::new(),
            third_parties: Vec::new(),
        }
    }

    /// Decode a snapshot from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSnapshot`] if the document is not valid
    /// JSON or lacks the `url` / `scannedAt` fields.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Third-party hosts with duplicates removed, in first-seen order.
    #[must_use]
    pub fn unique_third_parties(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(self.third_parties.len());
        for domain in &self.third_parties {
            if !seen.contains(&domain.as_str()) {
                seen.push(domain.as_str());
            }
        }
        seen
    }
}
