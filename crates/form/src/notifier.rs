//! The host-side "user created" setter.

use std::cell::Cell;
use std::rc::Rc;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Receives the "user created" signal from a form.
///
/// A form calls this with `true` exactly once per successful submission and
/// never with `false`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserCreatedNotifier {
    fn set_user_was_created(&self, created: bool);
}

impl<F> UserCreatedNotifier for F
where
    F: Fn(bool),
{
    fn set_user_was_created(&self, created: bool) {
        self(created)
    }
}

/// Shared boolean owned by the host.
///
/// Clones share the same cell, so the host keeps one handle and gives the
/// form another. Single-threaded by construction.
#[derive(Debug, Clone, Default)]
pub struct UserCreatedFlag(Rc<Cell<bool>>);

impl UserCreatedFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the flag
    pub fn get(&self) -> bool {
        self.0.get()
    }

    /// Reset the flag so the host can show the form again
    pub fn reset(&self) {
        self.0.set(false);
    }
}

impl UserCreatedNotifier for UserCreatedFlag {
    fn set_user_was_created(&self, created: bool) {
        self.0.set(created);
    }
}
