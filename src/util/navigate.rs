//! Hard-redirect collaborator for the unauthenticated-response interceptor.

/// Path navigated to when a response reports the session as unauthenticated.
pub const LOGIN_PATH: &str = "/login";

/// Performs a hard navigation to an app-relative path.
pub trait Navigate {
    fn to(&self, path: &str);
}

/// `window.location`-backed navigation for the browser build.
#[cfg(feature = "browser")]
#[derive(Debug, Default)]
pub struct BrowserNavigate;

#[cfg(feature = "browser")]
impl BrowserNavigate {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "browser")]
impl Navigate for BrowserNavigate {
    fn to(&self, path: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
}
