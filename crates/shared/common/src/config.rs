//! Form configuration loaded from environment variables.

use std::env;

use serde::{Deserialize, Serialize};

use domain::{
    PasswordPolicy, ValidationMode, ValidationOptions, DEFAULT_MAX_PASSWORD_LENGTH,
    DEFAULT_MIN_PASSWORD_LENGTH, MODE_ACCUMULATE,
};

use crate::error::AppResult;

/// Default log filter when neither `RUST_LOG` nor `FORM_LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Form configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormConfig {
    /// Minimum password length in characters
    pub password_min_length: usize,
    /// Maximum password length in characters
    pub password_max_length: usize,
    /// `accumulate` or `first`
    pub validation_mode: String,
    /// Log filter directive
    pub log_level: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            password_min_length: DEFAULT_MIN_PASSWORD_LENGTH,
            password_max_length: DEFAULT_MAX_PASSWORD_LENGTH,
            validation_mode: MODE_ACCUMULATE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl FormConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `.env` first if present. Unparsable numbers fall back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            password_min_length: lookup("FORM_PASSWORD_MIN_LENGTH")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.password_min_length),
            password_max_length: lookup("FORM_PASSWORD_MAX_LENGTH")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.password_max_length),
            validation_mode: lookup("FORM_VALIDATION_MODE").unwrap_or(defaults.validation_mode),
            log_level: lookup("FORM_LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// Build validation options from this configuration.
    ///
    /// # Errors
    /// Returns a configuration error for an unknown mode or inconsistent
    /// length bounds.
    pub fn validation_options(&self) -> AppResult<ValidationOptions> {
        let policy = PasswordPolicy::new(self.password_min_length, self.password_max_length)?;
        let mode = self.validation_mode.parse::<ValidationMode>()?;

        Ok(ValidationOptions::new(policy, mode))
    }
}
