//! Narrative generation (Bedrock-hosted Claude) configuration.

use serde::{Deserialize, Serialize};

fn default_region() -> String {
    String::from("us-east-1")
}

fn default_model_id() -> String {
    String::from("anthropic.claude-3-sonnet-20240229-v1:0")
}

const fn default_max_tokens() -> u32 {
    2000
}

const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NarrativeConfig {
    /// Bedrock API key, sent as a bearer token.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default = "default_model_id")]
    pub model_id: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Custom runtime endpoint. If empty, built from `region`.
    #[serde(default)]
    pub endpoint: String,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            region: default_region(),
            model_id: default_model_id(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            endpoint: String::new(),
        }
    }
}

impl NarrativeConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Bedrock runtime base URL, without a trailing slash.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        if self.endpoint.is_empty() {
            format!("https://bedrock-runtime.{}.amazonaws.com", self.region)
        } else {
            self.endpoint.trim_end_matches('/').to_string()
        }
    }
}
