//! HTTP scanner configuration.

use serde::{Deserialize, Serialize};

const fn default_timeout_secs() -> u64 {
    60
}

const fn default_max_redirects() -> usize {
    10
}

fn default_user_agent() -> String {
    format!("cookielens/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScannerConfig {
    /// Whole-request timeout for fetching the target page.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Redirects followed before giving up.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
        }
    }
}
