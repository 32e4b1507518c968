//! Session lifecycle: who is logged in, persisted across reloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The [`SessionStore`] is the process-wide authority over the current token
//! and user. Consumers receive it by injection rather than through a global,
//! read its state to gate rendering, and call its operations for
//! login/logout. Every mutation writes through to persistent storage in the
//! same operation, so the persisted record is always a snapshot of the last
//! successful state.
//!
//! ERROR HANDLING
//! ==============
//! Login/register failures propagate unchanged with no partial mutation. A
//! failed "who am I" refresh means the session is invalid and degrades to a
//! silent logout; nothing here is fatal.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::net::auth;
use crate::net::error::ApiError;
use crate::net::gateway::ApiGateway;
use crate::net::types::{AuthResponse, RegisterRequest, UserProfile};
use crate::util::storage::{SessionStorage, TOKEN_KEY, USER_KEY};

/// Current authentication state.
///
/// Invariant: `user` is never present while `token` is absent, and `loading`
/// transitions true→false exactly once per bootstrap attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        // Loading until bootstrap settles, so guards do not flash to the
        // login page before the stored session has been checked.
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }
}

/// Injectable session authority wired to the gateway and persistent storage.
pub struct SessionStore {
    gateway: Rc<ApiGateway>,
    storage: Rc<dyn SessionStorage>,
    state: RefCell<SessionState>,
}

impl SessionStore {
    pub fn new(gateway: Rc<ApiGateway>, storage: Rc<dyn SessionStorage>) -> Self {
        Self {
            gateway,
            storage,
            state: RefCell::new(SessionState::default()),
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.borrow().token.clone()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.state.borrow().user.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().user.is_some()
    }

    /// Restore a persisted session at startup.
    ///
    /// Without a stored token this makes no network call. With one, the
    /// gateway is configured and the user refreshed; a rejected token ends
    /// fully logged out. `loading` becomes false on every path.
    pub async fn bootstrap(&self) {
        let Some(token) = self.storage.get(TOKEN_KEY) else {
            self.state.borrow_mut().loading = false;
            return;
        };
        self.gateway.set_token(Some(token.clone()));
        self.state.borrow_mut().token = Some(token);
        if let Err(error) = self.refresh_user().await {
            log::warn!("session bootstrap failed: {error}");
        }
        self.state.borrow_mut().loading = false;
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Propagates the API error unchanged; state and storage are untouched
    /// on failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let response = auth::login(&self.gateway, email, password).await?;
        self.establish(&response);
        log::info!("logged in as {}", response.user.email);
        Ok(response)
    }

    /// Create an account; on success the session is established immediately.
    ///
    /// # Errors
    ///
    /// Propagates the API error unchanged; state and storage are untouched
    /// on failure.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let response = auth::register(&self.gateway, payload).await?;
        self.establish(&response);
        log::info!("registered as {}", response.user.email);
        Ok(response)
    }

    /// Re-fetch the current user with the already-configured token.
    ///
    /// # Errors
    ///
    /// On failure the session has already been logged out by the time the
    /// error returns, so state is never left half-valid.
    pub async fn refresh_user(&self) -> Result<UserProfile, ApiError> {
        match auth::current_user(&self.gateway).await {
            Ok(user) => {
                self.state.borrow_mut().user = Some(user.clone());
                self.persist_user(&user);
                Ok(user)
            }
            Err(error) => {
                log::warn!("failed to refresh current user: {error}");
                self.logout();
                Err(error)
            }
        }
    }

    /// Clear token, user, persisted record, and the gateway credential.
    /// Idempotent.
    pub fn logout(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.token = None;
            state.user = None;
        }
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.gateway.set_token(None);
    }

    /// Atomically adopt a successful auth payload in memory and storage.
    fn establish(&self, response: &AuthResponse) {
        {
            let mut state = self.state.borrow_mut();
            state.token = Some(response.access_token.clone());
            state.user = Some(response.user.clone());
        }
        self.storage.set(TOKEN_KEY, &response.access_token);
        self.persist_user(&response.user);
        self.gateway.set_token(Some(response.access_token.clone()));
    }

    fn persist_user(&self, user: &UserProfile) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.storage.set(USER_KEY, &raw);
        }
    }
}
