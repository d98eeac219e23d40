//! Registration submission lifecycle.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

pub const SUBMIT_LABEL: &str = "Register";
pub const SUBMITTING_LABEL: &str = "Registering...";

/// Status of the current registration attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    #[must_use]
    pub fn in_flight(self) -> bool {
        self == Self::Submitting
    }

    /// Submit control is disabled only while a request is outstanding.
    #[must_use]
    pub fn submit_disabled(self) -> bool {
        self.in_flight()
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        if self.in_flight() { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }

    /// State after the form is dismissed or reset. An outstanding attempt is
    /// left alone; it settles on its own.
    #[must_use]
    pub fn after_reset(self) -> Self {
        match self {
            Self::Succeeded | Self::Failed => Self::Idle,
            other => other,
        }
    }

    /// State after an attempt settles.
    #[must_use]
    pub fn settle(succeeded: bool) -> Self {
        if succeeded { Self::Succeeded } else { Self::Failed }
    }
}
