//! Shared HTTP response helpers.

use crate::error::ScanError;

/// Pass successful responses through; map any other status to
/// [`ScanError::Status`].
pub fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ScanError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ScanError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        })
    }
}
