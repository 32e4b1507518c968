//! User-profile endpoints.
//!
//! Profile mutation goes through [`update`] with a partial payload; the
//! session store's `refresh_user` is the read side for the logged-in user.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::error::ApiError;
use super::gateway::ApiGateway;
use super::transport::ApiRequest;
use super::types::{UserProfile, UserUpdate};

/// `GET /users/{id}`.
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn get(gateway: &ApiGateway, id: &str) -> Result<UserProfile, ApiError> {
    gateway.request_json(ApiRequest::get(format!("/users/{id}"))).await
}

/// `PUT /users/{id}` — partial profile update; `None` fields are omitted.
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn update(gateway: &ApiGateway, id: &str, changes: &UserUpdate) -> Result<UserProfile, ApiError> {
    gateway
        .request_json(ApiRequest::put(format!("/users/{id}")).with_json(changes)?)
        .await
}
