//! Injectable HTTP capability.
//!
//! Controllers never call `fetch` directly; they hold an `Rc<dyn HttpClient>`
//! so tests can script responses and faults deterministically.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use crate::error::TransportError;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// A POST request with a pre-encoded body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpRequest {
    #[must_use]
    pub fn post_json(url: impl Into<String>, body: String) -> Self {
        Self { url: url.into(), content_type: CONTENT_TYPE_JSON, body }
    }

    #[must_use]
    pub fn post_form(url: impl Into<String>, body: String) -> Self {
        Self { url: url.into(), content_type: CONTENT_TYPE_FORM, body }
    }
}

/// A completed response. The body is kept raw; callers decide how to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// True for 2xx statuses.
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and resolves once a response (of any status) arrives.
///
/// # Errors
///
/// Returns [`TransportError`] when no response was received at all.
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
