//! Resume upload endpoint.
//!
//! The file goes up as multipart form data under a fixed field name. The
//! client rejects anything but PDF before dispatch; the server remains the
//! authority on validation.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use super::error::ApiError;
use super::gateway::ApiGateway;
use super::transport::{ApiRequest, FilePayload};
use super::types::UploadResponse;

/// Multipart field name the server reads the file from.
pub const RESUME_FIELD: &str = "file";

/// The only MIME type accepted for resumes.
pub const RESUME_CONTENT_TYPE: &str = "application/pdf";

/// `POST /upload/resume` — upload a PDF resume.
///
/// # Errors
///
/// Returns [`ApiError::UnsupportedFileType`] without dispatching when the
/// payload is not a PDF; otherwise propagates the gateway error unchanged.
pub async fn upload_resume(gateway: &ApiGateway, file: FilePayload) -> Result<UploadResponse, ApiError> {
    if file.content_type != RESUME_CONTENT_TYPE {
        return Err(ApiError::UnsupportedFileType {
            expected: RESUME_CONTENT_TYPE.to_owned(),
            actual: file.content_type,
        });
    }
    gateway
        .request_json(ApiRequest::post("/upload/resume").with_multipart(RESUME_FIELD, file))
        .await
}
