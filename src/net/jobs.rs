//! Job-posting endpoints.
//!
//! Thin wrappers only: request construction and response decoding, no
//! client-side interpretation of the returned records.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use super::error::ApiError;
use super::gateway::ApiGateway;
use super::transport::ApiRequest;
use super::types::{Job, JobDraft};

/// `GET /jobs` — all active postings.
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn list_active(gateway: &ApiGateway) -> Result<Vec<Job>, ApiError> {
    gateway.request_json(ApiRequest::get("/jobs")).await
}

/// `GET /jobs/{id}`.
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn get(gateway: &ApiGateway, id: &str) -> Result<Job, ApiError> {
    gateway.request_json(ApiRequest::get(format!("/jobs/{id}"))).await
}

/// `GET /jobs/search?q=` — server-side keyword search.
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn search(gateway: &ApiGateway, query: &str) -> Result<Vec<Job>, ApiError> {
    gateway
        .request_json(ApiRequest::get("/jobs/search").with_query("q", query))
        .await
}

/// `POST /jobs` — create a posting (recruiters).
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn create(gateway: &ApiGateway, draft: &JobDraft) -> Result<Job, ApiError> {
    gateway
        .request_json(ApiRequest::post("/jobs").with_json(draft)?)
        .await
}

/// `PUT /jobs/{id}` — update a posting (recruiters).
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn update(gateway: &ApiGateway, id: &str, draft: &JobDraft) -> Result<Job, ApiError> {
    gateway
        .request_json(ApiRequest::put(format!("/jobs/{id}")).with_json(draft)?)
        .await
}

/// `DELETE /jobs/{id}` (recruiters).
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn delete(gateway: &ApiGateway, id: &str) -> Result<(), ApiError> {
    gateway.request_empty(ApiRequest::delete(format!("/jobs/{id}"))).await
}

/// `GET /jobs/recruiter/my-jobs` — the caller's own postings.
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn my_jobs(gateway: &ApiGateway) -> Result<Vec<Job>, ApiError> {
    gateway.request_json(ApiRequest::get("/jobs/recruiter/my-jobs")).await
}
