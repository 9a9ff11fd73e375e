//! Third-party host discovery in HTML.
//!
//! A plain HTTP fetch cannot observe the requests a browser would make, so
//! the page's `src` and `href` attributes stand in for them. Only absolute
//! (`https://cdn.example/...`) and protocol-relative (`//cdn.example/...`)
//! URLs can point at another host; relative ones are skipped.

use regex::Regex;
use reqwest::Url;

use crate::error::ScanError;

const RESOURCE_ATTRIBUTE: &str = r#"(?i)\b(?:src|href)\s*=\s*["']?((?:https?:)?//[^"'\s<>]+)"#;

/// Extracts resource hosts from an HTML document.
#[derive(Debug, Clone)]
pub struct HostExtractor {
    attribute: Regex,
}

impl HostExtractor {
    /// # Errors
    ///
    /// Returns [`ScanError::Setup`] if the attribute pattern fails to compile.
    pub fn new() -> Result<Self, ScanError> {
        let attribute =
            Regex::new(RESOURCE_ATTRIBUTE).map_err(|e| ScanError::Setup(e.to_string()))?;
        Ok(Self { attribute })
    }

    /// Lowercased hosts referenced by `html`, without duplicates, in
    /// document order.
    #[must_use]
    pub fn hosts(&self, html: &str) -> Vec<String> {
        let mut hosts: Vec<String> = Vec::new();
        for captures in self.attribute.captures_iter(html) {
            let Some(host) = captures.get(1).and_then(|m| host_of(m.as_str())) else {
                continue;
            };
            if !hosts.contains(&host) {
                hosts.push(host);
            }
        }
        hosts
    }

    /// Hosts referenced by `html` that do not belong to `base_host`.
    #[must_use]
    pub fn third_parties(&self, html: &str, base_host: &str) -> Vec<String> {
        self.hosts(html)
            .into_iter()
            .filter(|host| is_third_party(host, base_host))
            .collect()
    }
}

/// A host is first-party when it is the scanned host or one of its
/// subdomains, so `static.shop.example` is first-party for `shop.example`
/// but `evilshop.example` is not.
#[must_use]
pub fn is_third_party(host: &str, base_host: &str) -> bool {
    let first_party = host == base_host
        || host
            .strip_suffix(base_host)
            .is_some_and(|rest| rest.ends_with('.'));
    !first_party
}

fn host_of(raw: &str) -> Option<String> {
    let absolute = if raw.starts_with("//") {
        format!("https:{raw}")
    } else {
        raw.to_string()
    };
    let url = Url::parse(&absolute).ok()?;
    url.host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_ascii_lowercase)
}
