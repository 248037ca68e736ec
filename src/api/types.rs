//! Request and response types for the Portfolio backend API.
//!
//! All structs use camelCase serialization to match the API's JSON format.

use serde::{Deserialize, Serialize};

/// A portfolio project as returned by the projects endpoints.
///
/// Only the id is guaranteed; descriptive fields are optional so partial
/// records deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Public URL of the project image in object storage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Request body sent to POST /api/projects/presigned-upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUploadRequest {
    pub file_name: String,
    pub file_type: String,
}

/// Presigned upload slot issued by the backend.
///
/// Single-use: the upload URL is expected to be consumed immediately by the
/// S3 PUT step. No expiry tracking is performed client-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUpload {
    /// Target for the raw PUT of the file bytes.
    pub upload_url: String,
    /// Object storage key assigned to the file.
    pub file_key: String,
    /// Public-facing URL the file will be served from.
    pub image_url: String,
}

/// Outcome of the S3 upload step.
///
/// Checked rather than caught: the upload never raises, all failure funnels
/// into `{success:false, error}`.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl UploadOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Request body sent to POST /api/token.
#[derive(Debug, Serialize)]
pub struct TokenExchangeRequest {
    pub code: String,
}

/// Response from POST /api/token.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenExchangeResponse {
    /// Issued access token. The alias covers providers that reply in
    /// snake_case.
    #[serde(alias = "access_token")]
    pub access_token: String,
}
