//! Field-keyed record of the latest validation findings.

use serde::Serialize;

use crate::password::PasswordRule;
use crate::username::UsernameRule;

/// Validation findings of the most recent submission, keyed by field.
///
/// An absent field has no violation. A present password list is never empty;
/// the constructors collapse an empty list to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorState {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<Vec<String>>,
}

impl ErrorState {
    /// An error state with no findings
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an error state from rule violations.
    pub fn from_findings(username: Option<UsernameRule>, password: &[PasswordRule]) -> Self {
        let password = if password.is_empty() {
            None
        } else {
            Some(password.iter().map(ToString::to_string).collect())
        };

        Self {
            username: username.map(|rule| rule.to_string()),
            password,
        }
    }

    /// Username message, if the username is invalid
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Password messages in rule order, if the password is invalid
    pub fn password(&self) -> Option<&[String]> {
        self.password.as_deref()
    }

    /// True when neither field has a finding
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }

    /// Total number of messages across both fields
    pub fn message_count(&self) -> usize {
        usize::from(self.username.is_some()) + self.password.as_ref().map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_list_is_absent() {
        let state = ErrorState::from_findings(Some(UsernameRule::Required), &[]);
        assert_eq!(state.username(), Some("Username is required"));
        assert!(state.password().is_none());
        assert!(!state.is_empty());
        assert_eq!(state.message_count(), 1);
    }

    #[test]
    fn test_no_findings_is_empty() {
        let state = ErrorState::from_findings(None, &[]);
        assert!(state.is_empty());
        assert_eq!(state, ErrorState::empty());
        assert_eq!(state.message_count(), 0);
    }

    #[test]
    fn test_password_messages_keep_order() {
        let state = ErrorState::from_findings(
            None,
            &[PasswordRule::TooShort(10), PasswordRule::MissingDigit],
        );
        assert_eq!(
            state.password().unwrap(),
            &[
                "Password must be at least 10 characters long".to_string(),
                "Password must contain at least one number".to_string(),
            ]
        );
        assert_eq!(state.message_count(), 2);
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let empty = serde_json::to_value(ErrorState::empty()).unwrap();
        assert_eq!(empty, serde_json::json!({}));

        let state = ErrorState::from_findings(None, &[PasswordRule::ContainsSpace]);
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "password": ["Password cannot contain spaces"] })
        );
    }
}
