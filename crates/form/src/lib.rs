//! Create-User Form
//!
//! A registration form component: it holds username and password text,
//! validates both on submission, and signals the host through a
//! [`UserCreatedNotifier`] when validation passes.
//!
//! ```rust,ignore
//! use create_user_form::{CreateUserForm, FormEvent, UserCreatedFlag};
//!
//! let flag = UserCreatedFlag::new();
//! let mut form = CreateUserForm::new(flag.clone());
//! form.handle_event(FormEvent::UsernameChanged("alice".into()));
//! form.handle_event(FormEvent::PasswordChanged("Password123".into()));
//! form.handle_event(FormEvent::submit());
//! assert!(flag.get());
//! ```

pub mod event;
pub mod form;
pub mod notifier;
pub mod state;
pub mod view;

pub use domain::{ErrorState, PasswordPolicy, ValidationMode, ValidationOptions};
pub use event::{FormEvent, SubmitEvent};
pub use form::CreateUserForm;
pub use notifier::{UserCreatedFlag, UserCreatedNotifier};
#[cfg(any(test, feature = "test-utils"))]
pub use notifier::MockUserCreatedNotifier;
pub use state::{FormState, SubmissionPhase, SubmitOutcome};
pub use view::FormView;
