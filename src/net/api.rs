//! Registration and login calls against the backend API.
//!
//! ERROR HANDLING
//! ==============
//! The response body is parsed as JSON before the status is inspected, so a
//! non-JSON body fails the attempt even on 2xx. Only a string `detail` of an
//! object body is carried back on rejection; a `null` rejection body is
//! treated as unreadable.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{HttpClient, HttpRequest, HttpResponse};
use super::types::{ErrorBody, LoginForm, RegistrationForm};
use crate::error::{LoginError, RegistrationError};

/// Create an account via `POST {url}` with a JSON body.
///
/// # Errors
///
/// - [`RegistrationError::NetworkFault`] if no response arrived.
/// - [`RegistrationError::InvalidBody`] if the body is not JSON, or is
///   `null` on a non-2xx status.
/// - [`RegistrationError::ServerRejected`] for any non-2xx status.
pub async fn register(http: &dyn HttpClient, url: &str, form: &RegistrationForm) -> Result<(), RegistrationError> {
    let body = serde_json::to_string(form).map_err(|e| RegistrationError::InvalidBody(e.to_string()))?;
    let resp = http.send(HttpRequest::post_json(url, body)).await?;
    let data = parse_json_body(&resp).map_err(RegistrationError::InvalidBody)?;
    if resp.ok() {
        return Ok(());
    }
    let detail = rejection_detail(data)?;
    Err(RegistrationError::ServerRejected { status: resp.status, detail })
}

/// Exchange credentials for a token via `POST {url}` with a form body.
///
/// Returns the decoded JSON response on success.
///
/// # Errors
///
/// - [`LoginError::NetworkFault`] if no response arrived.
/// - [`LoginError::Rejected`] for any non-2xx status.
/// - [`LoginError::InvalidBody`] if a 2xx body is not JSON.
pub async fn login(http: &dyn HttpClient, url: &str, form: &LoginForm) -> Result<serde_json::Value, LoginError> {
    let resp = http.send(HttpRequest::post_form(url, form.to_form_body())).await?;
    if !resp.ok() {
        return Err(LoginError::Rejected { status: resp.status });
    }
    parse_json_body(&resp).map_err(LoginError::InvalidBody)
}

fn parse_json_body(resp: &HttpResponse) -> Result<serde_json::Value, String> {
    serde_json::from_str(&resp.body).map_err(|e| e.to_string())
}

fn rejection_detail(data: serde_json::Value) -> Result<Option<String>, RegistrationError> {
    match data {
        serde_json::Value::Null => Err(RegistrationError::InvalidBody("null error body".to_owned())),
        serde_json::Value::Object(_) => Ok(serde_json::from_value::<ErrorBody>(data)
            .ok()
            .and_then(|body| body.detail_text())),
        _ => Ok(None),
    }
}
