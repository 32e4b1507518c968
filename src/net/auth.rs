//! Authentication endpoints: login, register, and the "who am I" call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::ApiError;
use super::gateway::ApiGateway;
use super::transport::ApiRequest;
use super::types::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};

/// Exchange credentials for a session via `POST /auth/login`.
///
/// # Errors
///
/// Propagates the gateway error unchanged; the caller owns any messaging.
pub async fn login(gateway: &ApiGateway, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let payload = LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    };
    gateway
        .request_json(ApiRequest::post("/auth/login").with_json(&payload)?)
        .await
}

/// Create an account and establish a session via `POST /auth/register`.
///
/// # Errors
///
/// Propagates the gateway error unchanged.
pub async fn register(gateway: &ApiGateway, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    gateway
        .request_json(ApiRequest::post("/auth/register").with_json(payload)?)
        .await
}

/// Fetch the profile behind the configured token via `GET /users/me`.
///
/// # Errors
///
/// A 401 here means the token is expired or invalid; the gateway's
/// interceptor has already redirected by the time the error returns.
pub async fn current_user(gateway: &ApiGateway) -> Result<UserProfile, ApiError> {
    gateway.request_json(ApiRequest::get("/users/me")).await
}
