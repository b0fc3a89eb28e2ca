//! Per-instance form state.

use domain::{password_length, ErrorState};

/// Where the last submission attempt ended.
///
/// Validation itself runs synchronously inside a submit call, so there is
/// no observable in-between state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// No submission yet
    #[default]
    Idle,
    /// Last attempt had findings; errors are shown
    Invalid,
    /// Last attempt passed and the host was notified
    Valid,
}

/// Result of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Findings were recorded; the host was not notified
    Rejected,
    /// No findings; the host was notified
    Created,
}

impl SubmitOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, SubmitOutcome::Created)
    }
}

/// Field text and the latest findings of one form instance.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) errors: ErrorState,
}

// Don't expose the password in debug output
impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("errors", &self.errors)
            .finish()
    }
}

impl FormState {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Username length in the same units the password rules count
    pub fn username_length(&self) -> usize {
        password_length(&self.username)
    }

    /// Password length as the length rules count it (UTF-16 code units)
    pub fn password_length(&self) -> usize {
        password_length(&self.password)
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }
}
