//! Display snapshot of a form.

use serde::Serialize;

use crate::state::FormState;

/// Mask character used for password display
pub const PASSWORD_MASK_CHAR: char = '•';

/// What a host renders: field values and any messages attached to them.
///
/// Only the presence, content, and order of messages is meaningful; layout
/// and styling are up to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView<'a> {
    pub username: &'a str,
    /// Password with every character masked
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_error: Option<&'a str>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    pub password_errors: &'a [String],
}

impl<'a> FormView<'a> {
    pub(crate) fn new(state: &'a FormState) -> Self {
        Self {
            username: state.username(),
            password: mask(state.password()),
            username_error: state.errors().username(),
            password_errors: state.errors().password().unwrap_or_default(),
        }
    }

    /// True when any field has a message to show
    pub fn has_errors(&self) -> bool {
        self.username_error.is_some() || !self.password_errors.is_empty()
    }
}

fn mask(password: &str) -> String {
    password.chars().map(|_| PASSWORD_MASK_CHAR).collect()
}
