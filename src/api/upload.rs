//! Two-step image upload: request a presigned slot, then PUT the bytes.
//!
//! The presigned request goes through the backend and fails like any other
//! API call. The S3 PUT itself is checked rather than caught: every failure,
//! transport or HTTP, folds into the returned [`UploadOutcome`].

use super::client::ApiClient;
use super::types::{PresignedUpload, PresignedUploadRequest, UploadOutcome};
use crate::error::ApiError;

/// Fallback content type when the file's own type is unknown.
const OCTET_STREAM: &str = "application/octet-stream";

/// Request a presigned upload slot for a file.
///
/// POST /api/projects/presigned-upload. Attempted even without a token; the
/// backend rejects unauthorized callers.
pub async fn request_presigned_upload(
    client: &ApiClient,
    file_name: &str,
    file_type: &str,
) -> Result<PresignedUpload, ApiError> {
    let request = PresignedUploadRequest {
        file_name: file_name.to_string(),
        file_type: file_type.to_string(),
    };
    let resp = client
        .authenticated_post("/api/projects/presigned-upload", &request)
        .await?;
    if !resp.status().is_success() {
        return Err(ApiError::from_response(resp).await);
    }
    Ok(resp.json().await?)
}

/// PUT raw file bytes to an externally issued presigned URL.
///
/// Content type comes from the file if known, else a generic binary type.
/// Never returns `Err`: transport failures and non-2xx statuses both come
/// back as `{success:false, error}`.
pub async fn upload_to_s3(
    client: &ApiClient,
    data: Vec<u8>,
    content_type: Option<&str>,
    presigned_url: &str,
) -> UploadOutcome {
    let content_type = content_type.unwrap_or(OCTET_STREAM);

    match client.put_bytes(presigned_url, data, content_type).await {
        Ok(resp) if resp.status().is_success() => UploadOutcome::ok(),
        Ok(resp) => {
            let status = resp.status();
            log::warn!("S3 upload rejected: {}", status);
            UploadOutcome::failed(format!("Upload failed ({})", status))
        }
        Err(e) => {
            log::warn!("S3 upload failed: {}", e);
            UploadOutcome::failed(format!("Upload failed: {}", e))
        }
    }
}
