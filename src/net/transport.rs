//! Request/response model and the dispatch seam behind the gateway.
//!
//! DESIGN
//! ======
//! The gateway's middleware operates on [`ApiRequest`]/[`ApiResponse`] values
//! and hands the request to a [`Transport`]. The browser build dispatches via
//! `gloo-net`; native tests substitute a recording fake. Futures are local
//! (the execution model is single-threaded), so the trait stays dyn-safe via
//! `LocalBoxFuture`.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use futures::future::LocalBoxFuture;
use serde::Serialize;

use super::error::ApiError;

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A file staged for multipart upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePayload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Request body variants the transport knows how to encode.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart { field: String, file: FilePayload },
}

/// An API request relative to the configured base endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] when the value cannot be serialized.
    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    pub fn with_multipart(mut self, field: impl Into<String>, file: FilePayload) -> Self {
        self.body = RequestBody::Multipart { field: field.into(), file };
        self
    }

    /// The bearer token this request would send, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name == "Authorization")
            .and_then(|(_, value)| value.strip_prefix("Bearer "))
    }
}

/// A received response: status plus the decoded JSON body, when present.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Dispatches one request and resolves with the raw response.
///
/// Implementations report transport-level failures as [`ApiError::Network`]
/// and return `Ok` for any response that carried an HTTP status, success or
/// not; status interpretation is the gateway's job.
pub trait Transport {
    fn dispatch(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>>;
}

/// `gloo-net` transport used in the browser build.
#[cfg(feature = "browser")]
#[derive(Debug)]
pub struct BrowserTransport {
    base_url: String,
}

#[cfg(feature = "browser")]
impl BrowserTransport {
    /// `base_url` is the API prefix, e.g. `http://localhost:8080/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

#[cfg(feature = "browser")]
impl Transport for BrowserTransport {
    fn dispatch(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>> {
        let url = format!("{}{}", self.base_url, request.path);
        Box::pin(async move {
            let mut builder = match request.method {
                Method::Get => gloo_net::http::Request::get(&url),
                Method::Post => gloo_net::http::Request::post(&url),
                Method::Put => gloo_net::http::Request::put(&url),
                Method::Delete => gloo_net::http::Request::delete(&url),
            };
            if !request.query.is_empty() {
                builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let built = match request.body {
                RequestBody::Empty => builder.build(),
                RequestBody::Json(value) => builder
                    .header("Content-Type", "application/json")
                    .body(value.to_string()),
                // The browser sets the multipart boundary header itself.
                RequestBody::Multipart { field, file } => builder.body(build_form_data(&field, &file)?),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let response = built.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let body = if text.is_empty() {
                None
            } else {
                serde_json::from_str(&text).ok()
            };
            Ok(ApiResponse { status, body })
        })
    }
}

#[cfg(feature = "browser")]
fn build_form_data(field: &str, file: &FilePayload) -> Result<web_sys::FormData, ApiError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(file.bytes.as_slice()).into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| ApiError::Network("failed to create upload blob".to_owned()))?;
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("failed to create form data".to_owned()))?;
    form.append_with_blob_and_filename(field, &blob, &file.filename)
        .map_err(|_| ApiError::Network("failed to append upload blob".to_owned()))?;
    Ok(form)
}
