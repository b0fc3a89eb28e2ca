//! Username rule.

use thiserror::Error;

/// A violated username rule.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsernameRule {
    #[error("Username is required")]
    Required,
}

impl UsernameRule {
    /// Stable machine-readable code for this rule
    pub fn code(&self) -> &'static str {
        match self {
            UsernameRule::Required => "required",
        }
    }
}

/// The rule a username violates, if any.
///
/// Only blank input fails; the value itself is never trimmed or rewritten.
pub fn username_violation(username: &str) -> Option<UsernameRule> {
    username
        .trim_matches(is_blank_char)
        .is_empty()
        .then_some(UsernameRule::Required)
}

/// Characters stripped before the blank check: Unicode `White_Space`
/// without NEL, plus the byte order mark.
fn is_blank_char(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

/// Validate a username, returning the message to show when it is invalid.
pub fn validate_username(username: &str) -> Option<String> {
    username_violation(username).map(|rule| rule.to_string())
}
