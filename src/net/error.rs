//! Uniform error result for all API operations.
//!
//! ERROR HANDLING
//! ==============
//! Domain operations surface errors unmodified for UI-level messaging; the
//! core never interprets error bodies beyond the status code. The gateway
//! never retries and never swallows errors; the 401 interceptor performs its
//! side effect and then still re-raises the original error.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// HTTP status signalling an unauthenticated session.
pub const UNAUTHORIZED: u16 = 401;

/// Error result carried by every API operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        /// Server-provided error body, when one was present and was JSON.
        body: Option<serde_json::Value>,
    },

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// The response body did not match the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// An upload was rejected client-side before dispatch.
    #[error("only {expected} uploads are accepted, got {actual}")]
    UnsupportedFileType { expected: String, actual: String },
}

impl ApiError {
    /// Build a status error, preferring the server body's `message` field.
    pub(crate) fn from_status(status: u16, body: Option<serde_json::Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(|value| value.get("message"))
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| format!("request failed with status {status}"), str::to_owned);
        Self::Status { status, message, body }
    }

    /// The HTTP status behind this error, if there was a response at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error is the 401 unauthenticated signal.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(UNAUTHORIZED)
    }
}
