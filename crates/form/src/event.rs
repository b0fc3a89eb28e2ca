//! Events a host dispatches into the form.

/// A form submission, as raised by a button press or native form submit.
///
/// The default action is the host's native behaviour (navigation or reload).
/// The form always suppresses it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the host's default action for this event
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Input events handled by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The username text field changed
    UsernameChanged(String),
    /// The password text field changed
    PasswordChanged(String),
    /// The form was submitted
    Submitted(SubmitEvent),
}

impl FormEvent {
    /// A fresh submission event
    pub fn submit() -> Self {
        FormEvent::Submitted(SubmitEvent::new())
    }
}
