//! The scanner interface and its plain-HTTP implementation.

use std::future::Future;
use std::time::Duration;

use chrono::Utc;
use lens_config::ScannerConfig;
use lens_core::entities::Snapshot;
use reqwest::Url;
use reqwest::header::SET_COOKIE;
use tracing::{debug, instrument};

use crate::cookie::parse_set_cookie;
use crate::error::ScanError;
use crate::hosts::HostExtractor;
use crate::http::check_response;

/// Captures the client-side state of a URL.
pub trait Scanner: Send + Sync {
    /// Scan `url` and return what was observed.
    fn scan(&self, url: &str) -> impl Future<Output = Result<Snapshot, ScanError>> + Send;
}

/// Scanner that fetches the page once over HTTP.
///
/// Cookies come from the `Set-Cookie` headers of the final response and
/// third parties from resource URLs in the body. Local storage is not
/// observable this way and is always empty.
#[derive(Debug, Clone)]
pub struct HttpScanner {
    http: reqwest::Client,
    extractor: HostExtractor,
}

impl HttpScanner {
    /// # Errors
    ///
    /// Returns [`ScanError::Http`] if the HTTP client cannot be built and
    /// [`ScanError::Setup`] if host extraction cannot be initialized.
    pub fn new(config: &ScannerConfig) -> Result<Self, ScanError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;
        Ok(Self {
            http,
            extractor: HostExtractor::new()?,
        })
    }
}

impl Scanner for HttpScanner {
    #[instrument(skip(self))]
    async fn scan(&self, url: &str) -> Result<Snapshot, ScanError> {
        let target = normalize_url(url)?;
        let base_host = target
            .host_str()
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let resp = check_response(self.http.get(target.clone()).send().await?)?;
        let scanned_at = Utc::now();

        let cookies = resp
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|header| parse_set_cookie(header, &base_host, scanned_at))
            .collect::<Vec<_>>();

        let body = resp.text().await?;
        let third_parties = self.extractor.third_parties(&body, &base_host);

        debug!(
            cookies = cookies.len(),
            third_parties = third_parties.len(),
            "page scanned"
        );

        let mut snapshot = Snapshot::new(target.as_str(), scanned_at);
        snapshot.cookies = cookies;
        snapshot.third_parties = third_parties;
        Ok(snapshot)
    }
}

/// Turn user input into an absolute http(s) URL. Input without a scheme is
/// taken as `https://`.
///
/// # Errors
///
/// Returns [`ScanError::InvalidUrl`] for unparseable input, other schemes,
/// or URLs without a host.
pub fn normalize_url(input: &str) -> Result<Url, ScanError> {
    let trimmed = input.trim();
    let invalid = |reason: &str| ScanError::InvalidUrl {
        url: input.to_string(),
        reason: reason.to_string(),
    };
    if trimmed.is_empty() {
        return Err(invalid("empty URL"));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    let url = Url::parse(&candidate).map_err(|e| invalid(&e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("only http and https URLs can be scanned"));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("URL has no host"));
    }
    Ok(url)
}
