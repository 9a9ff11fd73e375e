//! Claude on Amazon Bedrock, called through the runtime `invoke` endpoint.

use std::time::Duration;

use lens_config::NarrativeConfig;
use lens_core::entities::Snapshot;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::NarrativeGenerator;
use crate::error::NarrativeError;
use crate::http::check_response;

/// Messages API version Bedrock expects for Anthropic models.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

#[derive(Debug, Serialize)]
struct InvokeRequest<'a> {
    anthropic_version: &'static str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct InvokeResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

/// Narrative generator backed by a Bedrock-hosted Claude model.
#[derive(Debug, Clone)]
pub struct BedrockNarrator {
    http: reqwest::Client,
    invoke_url: String,
    api_key: String,
    max_tokens: u32,
}

impl BedrockNarrator {
    /// # Errors
    ///
    /// Returns [`NarrativeError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &NarrativeConfig) -> Result<Self, NarrativeError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("cookielens/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            invoke_url: invoke_url(config),
            api_key: config.api_key.clone(),
            max_tokens: config.max_tokens,
        })
    }

    #[must_use]
    pub fn invoke_url(&self) -> &str {
        &self.invoke_url
    }
}

impl NarrativeGenerator for BedrockNarrator {
    #[instrument(skip_all, fields(url = %snapshot.url))]
    async fn summarize(&self, snapshot: &Snapshot) -> Result<String, NarrativeError> {
        let prompt = build_prompt(snapshot)?;
        let body = request_body(&prompt, self.max_tokens);

        let resp = self
            .http
            .post(&self.invoke_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let text = parse_response(&resp.text().await?)?;
        debug!(chars = text.len(), "narrative generated");
        Ok(text)
    }
}

/// `{endpoint}/model/{model_id}/invoke`.
#[must_use]
pub fn invoke_url(config: &NarrativeConfig) -> String {
    format!("{}/model/{}/invoke", config.endpoint_url(), config.model_id)
}

/// Prompt asking for a short, fixed-layout privacy assessment of `snapshot`.
///
/// # Errors
///
/// Returns [`NarrativeError::Prompt`] if the snapshot cannot be serialized.
pub fn build_prompt(snapshot: &Snapshot) -> Result<String, NarrativeError> {
    let scan = serde_json::to_string_pretty(snapshot)?;
    Ok(format!(
        "You are reviewing a website privacy scan. In at most 150 words, assess \
cookie security (Secure, HttpOnly and SameSite attributes), data kept in local storage, \
and the third-party services the page loads.\n\n\
Scan:\n{scan}\n\n\
Answer in exactly this layout:\n\
**Risk Level**: Low, Medium or High\n\
**Key Findings**:\n- finding\n- finding\n\n\
**Recommendations**:\n- action\n- action"
    ))
}

fn request_body(prompt: &str, max_tokens: u32) -> InvokeRequest<'_> {
    InvokeRequest {
        anthropic_version: ANTHROPIC_VERSION,
        max_tokens,
        messages: [Message {
            role: "user",
            content: prompt,
        }],
    }
}

/// Text of the first content block of a Messages API response.
///
/// # Errors
///
/// Returns [`NarrativeError::Parse`] if the body is not a Messages response
/// or its first block has no text.
pub fn parse_response(body: &str) -> Result<String, NarrativeError> {
    let response: InvokeResponse =
        serde_json::from_str(body).map_err(|e| NarrativeError::Parse(e.to_string()))?;
    response
        .content
        .into_iter()
        .next()
        .map(|block| block.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| NarrativeError::Parse("response has no text content".into()))
}
