//! The create-user form component.

use tracing::{debug, info, info_span};

use domain::{validate_credentials, ErrorState, ValidationOptions};

use crate::event::{FormEvent, SubmitEvent};
use crate::notifier::UserCreatedNotifier;
use crate::state::{FormState, SubmissionPhase, SubmitOutcome};
use crate::view::FormView;

/// Registration form that validates a username and password and tells the
/// host when a user was created.
///
/// Each instance owns its state; dropping the form discards it.
pub struct CreateUserForm<N> {
    state: FormState,
    options: ValidationOptions,
    phase: SubmissionPhase,
    notifier: N,
}

impl<N: UserCreatedNotifier> CreateUserForm<N> {
    /// Mount a form with the default password policy.
    pub fn new(notifier: N) -> Self {
        Self::with_options(notifier, ValidationOptions::default())
    }

    /// Mount a form with custom validation options.
    pub fn with_options(notifier: N, options: ValidationOptions) -> Self {
        Self {
            state: FormState::default(),
            options,
            phase: SubmissionPhase::Idle,
            notifier,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ErrorState {
        &self.state.errors
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Replace the username text. Errors stay until the next submission.
    pub fn set_username(&mut self, value: impl Into<String>) {
        self.state.username = value.into();
        debug!(length = self.state.username_length(), "Username changed");
    }

    /// Replace the password text. Errors stay until the next submission.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.state.password = value.into();
        debug!(length = self.state.password_length(), "Password changed");
    }

    /// Dispatch one input event.
    ///
    /// Returns the outcome for submissions and `None` for text changes.
    pub fn handle_event(&mut self, event: FormEvent) -> Option<SubmitOutcome> {
        match event {
            FormEvent::UsernameChanged(value) => {
                self.set_username(value);
                None
            }
            FormEvent::PasswordChanged(value) => {
                self.set_password(value);
                None
            }
            FormEvent::Submitted(mut submit) => Some(self.submit(&mut submit)),
        }
    }

    /// Validate the current input and either record findings or notify the
    /// host.
    ///
    /// The stored error state is replaced on every call, never merged.
    pub fn submit(&mut self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        let span = info_span!("create_user_form.submit");
        let _guard = span.enter();

        let findings =
            validate_credentials(&self.state.username, &self.state.password, &self.options);
        let errors = ErrorState::from(findings);

        if !errors.is_empty() {
            debug!(findings = errors.message_count(), "Submission rejected");
            self.state.errors = errors;
            self.phase = SubmissionPhase::Invalid;
            return SubmitOutcome::Rejected;
        }

        self.state.errors = ErrorState::empty();
        self.phase = SubmissionPhase::Valid;
        info!(username = %self.state.username, "User created");
        self.notifier.set_user_was_created(true);

        SubmitOutcome::Created
    }

    /// Snapshot of what the host should display.
    pub fn view(&self) -> FormView<'_> {
        FormView::new(&self.state)
    }
}
