//! Shared API gateway composing auth middleware around the transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every domain operation goes through [`ApiGateway::send`], which applies
//! two cross-cutting behaviors: [`attach_auth`] adds the configured bearer
//! token to the outgoing request, and [`handle_unauthorized`] reacts to any
//! 401 response by clearing the persisted token and forcing navigation to
//! the login path. Both are standalone functions so they can be tested in
//! isolation from the gateway.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses become [`ApiError::Status`]; the 401 path performs
//! its side effect and still returns the original error so callers can react.
//! The gateway never retries.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use super::error::{ApiError, UNAUTHORIZED};
use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::util::navigate::{LOGIN_PATH, Navigate};
use crate::util::storage::{SessionStorage, TOKEN_KEY};

/// Outbound middleware: attach the configured token as a bearer credential.
/// A request that already carries an `Authorization` header is left alone so
/// the credential is never duplicated.
pub fn attach_auth(token: Option<&str>, request: &mut ApiRequest) {
    if request.headers.iter().any(|(name, _)| name == "Authorization") {
        return;
    }
    if let Some(token) = token {
        request.headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
    }
}

/// Inbound middleware: on a 401 status, clear the persisted token and force
/// navigation to the login entry point. Any other status passes through.
pub fn handle_unauthorized(status: u16, storage: &dyn SessionStorage, navigate: &dyn Navigate) {
    if status == UNAUTHORIZED {
        log::warn!("unauthenticated response intercepted, redirecting to {LOGIN_PATH}");
        storage.remove(TOKEN_KEY);
        navigate.to(LOGIN_PATH);
    }
}

/// The one shared HTTP client for the remote API.
///
/// Holds the only mutable gateway state, the configured bearer token, and the
/// collaborators needed by the 401 interceptor.
pub struct ApiGateway {
    transport: Rc<dyn Transport>,
    token: RefCell<Option<String>>,
    storage: Rc<dyn SessionStorage>,
    navigate: Rc<dyn Navigate>,
}

impl ApiGateway {
    pub fn new(
        transport: Rc<dyn Transport>,
        storage: Rc<dyn SessionStorage>,
        navigate: Rc<dyn Navigate>,
    ) -> Self {
        Self {
            transport,
            token: RefCell::new(None),
            storage,
            navigate,
        }
    }

    /// Gateway wired with the `gloo-net` transport against `base_url`.
    #[cfg(feature = "browser")]
    pub fn browser(
        base_url: impl Into<String>,
        storage: Rc<dyn SessionStorage>,
        navigate: Rc<dyn Navigate>,
    ) -> Self {
        Self::new(
            Rc::new(super::transport::BrowserTransport::new(base_url)),
            storage,
            navigate,
        )
    }

    /// Set (or clear) the default bearer token applied to every request.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    /// Dispatch a request through the middleware stack.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response arrived and
    /// [`ApiError::Status`] for any non-2xx status.
    pub async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        {
            let token = self.token.borrow();
            attach_auth(token.as_deref(), &mut request);
        }
        log::debug!("{} {}", request.method.as_str(), request.path);
        let response = self.transport.dispatch(request).await?;
        handle_unauthorized(response.status, &*self.storage, &*self.navigate);
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_status(response.status, response.body))
        }
    }

    /// Dispatch and decode the JSON response body into `T`.
    ///
    /// # Errors
    ///
    /// As [`ApiGateway::send`], plus [`ApiError::Decode`] when the body does
    /// not match `T`.
    pub async fn request_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let body = response.body.unwrap_or(serde_json::Value::Null);
        serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Dispatch a request whose response body is irrelevant.
    ///
    /// # Errors
    ///
    /// As [`ApiGateway::send`].
    pub async fn request_empty(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }
}
