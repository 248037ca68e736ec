//! Error types for Portfolio API requests.
//!
//! Two failure classes: the backend answered with a non-success status
//! (`Status`, carrying the numeric code and response body text), or the
//! request never completed (`Transport`). Neither is retried internally.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend responded with a non-2xx status.
    #[error("request failed ({status}): {body}")]
    Status { status: u16, body: String },

    /// The request failed below HTTP: connect, DNS, TLS, or body read/parse.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Build a `Status` error from a non-success response, consuming its body.
    pub async fn from_response(resp: reqwest::Response) -> Self {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        ApiError::Status { status, body }
    }
}
