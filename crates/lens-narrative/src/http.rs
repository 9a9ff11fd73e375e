//! Shared HTTP response helpers.

use crate::error::NarrativeError;

/// Return the response unchanged on success; otherwise read the body into
/// [`NarrativeError::Api`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, NarrativeError> {
    if !resp.status().is_success() {
        return Err(NarrativeError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
