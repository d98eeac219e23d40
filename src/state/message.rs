//! Message banner shown inside the registration modal.
//!
//! A banner is either hidden with empty text, or visible with exactly one
//! kind. The constructors are the only way to build one, which keeps that
//! pairing intact.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

pub const SUCCESS_MESSAGE: &str = "Registration successful! Welcome aboard.";

const BASE_CLASS: &str = "message";
const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    None,
    Success,
    Error,
}

impl MessageKind {
    #[must_use]
    pub fn as_class(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Success => Some("success"),
            Self::Error => Some("error"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageBanner {
    text: String,
    kind: MessageKind,
}

impl MessageBanner {
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Success }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Error }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Full `class` attribute for the message region.
    #[must_use]
    pub fn class_name(&self) -> String {
        match self.kind.as_class() {
            Some(kind) => format!("{BASE_CLASS} {kind} {ACTIVE_CLASS}"),
            None => BASE_CLASS.to_owned(),
        }
    }
}
