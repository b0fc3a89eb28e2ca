//! Registration input and the combined username/password check.

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::{FIELD_PASSWORD, FIELD_USERNAME};
use crate::error_state::ErrorState;
use crate::password::{PasswordPolicy, PasswordRule, ValidationMode};
use crate::username::{username_violation, UsernameRule};

/// Settings that shape how a registration is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    pub policy: PasswordPolicy,
    pub mode: ValidationMode,
}

impl ValidationOptions {
    pub fn new(policy: PasswordPolicy, mode: ValidationMode) -> Self {
        Self { policy, mode }
    }
}

/// Rule violations found in one registration attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub username: Option<UsernameRule>,
    pub password: Vec<PasswordRule>,
}

impl Findings {
    /// True when no rule was violated
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_empty()
    }
}

impl From<Findings> for ErrorState {
    fn from(findings: Findings) -> Self {
        ErrorState::from_findings(findings.username, &findings.password)
    }
}

/// Check a username and password pair.
///
/// Both fields are always evaluated; neither result hides the other.
pub fn validate_credentials(
    username: &str,
    password: &str,
    options: &ValidationOptions,
) -> Findings {
    Findings {
        username: username_violation(username),
        password: options.policy.violations_with_mode(password, options.mode),
    }
}

/// Username and password as entered by the user.
#[derive(Clone, Default, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// Don't expose the password in debug output
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Findings for these credentials under `options`.
    pub fn findings(&self, options: &ValidationOptions) -> Findings {
        validate_credentials(&self.username, &self.password, options)
    }

    /// Error state for these credentials under `options`.
    pub fn error_state(&self, options: &ValidationOptions) -> ErrorState {
        self.findings(options).into()
    }
}

/// Uses the default policy and reports every violation, one
/// `ValidationError` per rule in rule order.
impl Validate for Credentials {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let findings = self.findings(&ValidationOptions::default());
        if findings.is_empty() {
            return Ok(());
        }

        let mut errors = ValidationErrors::new();
        if let Some(rule) = findings.username {
            errors.add(FIELD_USERNAME, rule_error(rule.code(), rule.to_string()));
        }
        for rule in &findings.password {
            errors.add(FIELD_PASSWORD, rule_error(rule.code(), rule.to_string()));
        }

        Err(errors)
    }
}

fn rule_error(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}
