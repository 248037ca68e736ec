//! OAuth authorization-code exchange.

use super::client::ApiClient;
use super::types::{TokenExchangeRequest, TokenExchangeResponse};
use crate::error::ApiError;

/// Exchange an OAuth authorization code for an access token.
///
/// POST /api/token, unauthenticated (no bearer header is sent). Returns the
/// issued access token; storing it is the caller's decision.
pub async fn exchange_code_for_token(client: &ApiClient, code: &str) -> Result<String, ApiError> {
    let request = TokenExchangeRequest {
        code: code.to_string(),
    };
    let resp = client.post("/api/token", &request).await?;
    if !resp.status().is_success() {
        return Err(ApiError::from_response(resp).await);
    }
    let token: TokenExchangeResponse = resp.json().await?;
    Ok(token.access_token)
}
