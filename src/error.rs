//! Error types for page operations.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is scoped to the single operation that produced it. None of
//! these errors are fatal to the page: registration failures end up in the
//! message banner, login failures in an alert, and storage failures are
//! logged and dropped by the sidebar.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";
pub const REGISTRATION_FALLBACK_MESSAGE: &str = "Registration failed. Please try again.";

/// The HTTP layer could not produce a response at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

/// Errors produced by a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    /// The server answered with a non-2xx status.
    #[error("registration rejected: status {status}")]
    ServerRejected { status: u16, detail: Option<String> },

    /// The request never completed.
    #[error("network fault: {0}")]
    NetworkFault(String),

    /// The response body was not JSON.
    #[error("invalid response body: {0}")]
    InvalidBody(String),

    /// A previous attempt is still outstanding.
    #[error("registration already in flight")]
    InFlight,
}

impl RegistrationError {
    /// Text shown in the message banner for this failure.
    ///
    /// A malformed body follows the same path as a dropped connection.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ServerRejected { detail: Some(detail), .. } if !detail.is_empty() => detail.clone(),
            Self::ServerRejected { .. } | Self::InFlight => REGISTRATION_FALLBACK_MESSAGE.to_owned(),
            Self::NetworkFault(_) | Self::InvalidBody(_) => NETWORK_ERROR_MESSAGE.to_owned(),
        }
    }
}

impl From<TransportError> for RegistrationError {
    fn from(err: TransportError) -> Self {
        Self::NetworkFault(err.0)
    }
}

/// Errors produced by the login call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("login rejected: status {status}")]
    Rejected { status: u16 },
    #[error("network fault: {0}")]
    NetworkFault(String),
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

impl From<TransportError> for LoginError {
    fn from(err: TransportError) -> Self {
        Self::NetworkFault(err.0)
    }
}

/// Client-local key-value storage failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage area exists (disabled, sandboxed, or not a browser).
    #[error("storage unavailable")]
    Unavailable,
    /// The storage area refused the operation (e.g. quota exceeded).
    #[error("storage rejected operation: {0}")]
    Rejected(String),
}
