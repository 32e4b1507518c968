//! Job-application endpoints.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use super::error::ApiError;
use super::gateway::ApiGateway;
use super::transport::ApiRequest;
use super::types::{Application, ApplicationStatus};

/// `POST /applications` — apply to a job with a cover letter.
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn apply(gateway: &ApiGateway, job_id: &str, cover_letter: &str) -> Result<Application, ApiError> {
    let payload = serde_json::json!({
        "jobId": job_id,
        "coverLetter": cover_letter,
    });
    gateway
        .request_json(ApiRequest::post("/applications").with_json(&payload)?)
        .await
}

/// `GET /applications/my-applications` — the seeker's own applications.
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn my_applications(gateway: &ApiGateway) -> Result<Vec<Application>, ApiError> {
    gateway
        .request_json(ApiRequest::get("/applications/my-applications"))
        .await
}

/// `GET /applications/job/{jobId}` — applicants for one posting (recruiters).
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn by_job(gateway: &ApiGateway, job_id: &str) -> Result<Vec<Application>, ApiError> {
    gateway
        .request_json(ApiRequest::get(format!("/applications/job/{job_id}")))
        .await
}

/// `PUT /applications/{id}/status` — move an application through review.
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn update_status(
    gateway: &ApiGateway,
    id: &str,
    status: ApplicationStatus,
) -> Result<Application, ApiError> {
    let payload = serde_json::json!({ "status": status });
    gateway
        .request_json(ApiRequest::put(format!("/applications/{id}/status")).with_json(&payload)?)
        .await
}
