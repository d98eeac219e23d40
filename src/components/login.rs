//! Password login against the token endpoint.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::rc::Rc;

use crate::config::PageConfig;
use crate::dom::Notifier;
use crate::error::LoginError;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::LoginForm;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

pub struct LoginFlow {
    http: Rc<dyn HttpClient>,
    notifier: Rc<dyn Notifier>,
    login_url: String,
}

impl LoginFlow {
    pub fn new(http: Rc<dyn HttpClient>, notifier: Rc<dyn Notifier>, config: &PageConfig) -> Self {
        Self { http, notifier, login_url: config.login_url.clone() }
    }

    /// Exchange an email and password for a token response.
    ///
    /// A rejected login alerts the user; a transport failure is only logged.
    ///
    /// # Errors
    ///
    /// Returns the [`LoginError`] for the attempt.
    pub async fn login(&self, email: &str, password: &str) -> Result<serde_json::Value, LoginError> {
        let form = LoginForm { username: email.to_owned(), password: password.to_owned() };
        match api::login(self.http.as_ref(), &self.login_url, &form).await {
            Ok(data) => {
                log::info!("Logged in");
                Ok(data)
            }
            Err(err @ LoginError::Rejected { .. }) => {
                log::warn!("{err}");
                self.notifier.alert(LOGIN_FAILED_MESSAGE);
                Err(err)
            }
            Err(err) => {
                log::error!("login request failed: {err}");
                Err(err)
            }
        }
    }
}
