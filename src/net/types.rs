//! Wire DTOs for the registration and login endpoints.
//!
//! DESIGN
//! ======
//! The backend owns these contracts. The client only needs the request
//! shapes and the optional `detail` string of an error body.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Values collected from the registration form for one submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: String,
}

/// Error body returned by the API on non-2xx responses.
///
/// `detail` is only honoured when it is a string; validation errors that
/// carry a structured `detail` fall back to the generic message.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    #[must_use]
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

/// OAuth2 password-grant form posted to the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Encode as `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn to_form_body(&self) -> String {
        format!(
            "username={}&password={}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password)
        )
    }
}
