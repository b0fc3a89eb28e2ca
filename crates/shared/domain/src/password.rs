//! Password rules and the policy that evaluates them.
//!
//! Every rule is checked against the whole string; a policy never stops at
//! the first failure unless asked to through [`ValidationMode`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{
    DEFAULT_MAX_PASSWORD_LENGTH, DEFAULT_MIN_PASSWORD_LENGTH, FORBIDDEN_PASSWORD_CHAR,
    MODE_ACCUMULATE, MODE_FIRST_VIOLATION, VALID_MODES,
};
use crate::error::{DomainError, DomainResult};

/// A violated password rule.
///
/// Variants are declared in evaluation order. `Display` yields the message
/// shown next to the password field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordRule {
    #[error("Password must be at least {0} characters long")]
    TooShort(usize),

    #[error("Password must be at most {0} characters long")]
    TooLong(usize),

    #[error("Password cannot contain spaces")]
    ContainsSpace,

    #[error("Password must contain at least one number")]
    MissingDigit,

    #[error("Password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    MissingLowercase,
}

impl PasswordRule {
    /// Stable machine-readable code for this rule
    pub fn code(&self) -> &'static str {
        match self {
            PasswordRule::TooShort(_) => "too_short",
            PasswordRule::TooLong(_) => "too_long",
            PasswordRule::ContainsSpace => "contains_space",
            PasswordRule::MissingDigit => "missing_digit",
            PasswordRule::MissingUppercase => "missing_uppercase",
            PasswordRule::MissingLowercase => "missing_lowercase",
        }
    }
}

/// How many password findings a policy reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Every violated rule, in rule order
    #[default]
    Accumulate,
    /// Only the first violated rule
    FirstViolation,
}

impl FromStr for ValidationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            MODE_ACCUMULATE => Ok(ValidationMode::Accumulate),
            MODE_FIRST_VIOLATION => Ok(ValidationMode::FirstViolation),
            other => Err(DomainError::validation(format!(
                "Unknown validation mode '{}' (expected one of: {})",
                other,
                VALID_MODES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Accumulate => write!(f, "{}", MODE_ACCUMULATE),
            ValidationMode::FirstViolation => write!(f, "{}", MODE_FIRST_VIOLATION),
        }
    }
}

/// Length bounds plus the fixed character-class rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    max_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_length: DEFAULT_MAX_PASSWORD_LENGTH,
        }
    }
}

impl PasswordPolicy {
    /// Create a policy with custom length bounds.
    ///
    /// # Errors
    /// Returns a validation error if `min_length` is zero or greater than
    /// `max_length`.
    pub fn new(min_length: usize, max_length: usize) -> DomainResult<Self> {
        if min_length == 0 {
            return Err(DomainError::validation(
                "Minimum password length must be at least 1",
            ));
        }

        if min_length > max_length {
            return Err(DomainError::validation(format!(
                "Minimum password length ({}) exceeds maximum ({})",
                min_length, max_length
            )));
        }

        Ok(Self {
            min_length,
            max_length,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// All rules this policy enforces, in evaluation order.
    pub fn rules(&self) -> [PasswordRule; 6] {
        [
            PasswordRule::TooShort(self.min_length),
            PasswordRule::TooLong(self.max_length),
            PasswordRule::ContainsSpace,
            PasswordRule::MissingDigit,
            PasswordRule::MissingUppercase,
            PasswordRule::MissingLowercase,
        ]
    }

    /// Every rule the password violates, in evaluation order.
    ///
    /// Length is measured in UTF-16 code units, so a character outside the
    /// Basic Multilingual Plane counts as two.
    pub fn violations(&self, password: &str) -> Vec<PasswordRule> {
        let length = password_length(password);

        let checks = [
            (length < self.min_length, PasswordRule::TooShort(self.min_length)),
            (length > self.max_length, PasswordRule::TooLong(self.max_length)),
            (
                password.contains(FORBIDDEN_PASSWORD_CHAR),
                PasswordRule::ContainsSpace,
            ),
            (
                !password.chars().any(|c| c.is_ascii_digit()),
                PasswordRule::MissingDigit,
            ),
            (
                !password.chars().any(|c| c.is_ascii_uppercase()),
                PasswordRule::MissingUppercase,
            ),
            (
                !password.chars().any(|c| c.is_ascii_lowercase()),
                PasswordRule::MissingLowercase,
            ),
        ];

        checks
            .into_iter()
            .filter_map(|(violated, rule)| violated.then_some(rule))
            .collect()
    }

    /// Violations narrowed by `mode`.
    pub fn violations_with_mode(&self, password: &str, mode: ValidationMode) -> Vec<PasswordRule> {
        let mut violations = self.violations(password);
        if mode == ValidationMode::FirstViolation {
            violations.truncate(1);
        }
        violations
    }

    /// Messages for every violated rule, in evaluation order.
    pub fn validate(&self, password: &str) -> Vec<String> {
        self.validate_with_mode(password, ValidationMode::Accumulate)
    }

    /// Messages for the violations selected by `mode`.
    pub fn validate_with_mode(&self, password: &str, mode: ValidationMode) -> Vec<String> {
        self.violations_with_mode(password, mode)
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

/// Password length in UTF-16 code units
pub fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Validate a password against the default policy.
///
/// Returns an empty list when the password is acceptable.
pub fn validate_password(password: &str) -> Vec<String> {
    PasswordPolicy::default().validate(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOO_SHORT: &str = "Password must be at least 10 characters long";
    const TOO_LONG: &str = "Password must be at most 24 characters long";
    const SPACES: &str = "Password cannot contain spaces";
    const DIGIT: &str = "Password must contain at least one number";
    const UPPER: &str = "Password must contain at least one uppercase letter";
    const LOWER: &str = "Password must contain at least one lowercase letter";

    #[test]
    fn test_valid_password_has_no_violations() {
        assert!(validate_password("Password123").is_empty());
        assert!(validate_password("Abcdefghi1").is_empty());
    }

    #[test]
    fn test_short_password_reports_in_rule_order() {
        assert_eq!(validate_password("short"), vec![TOO_SHORT, DIGIT, UPPER]);
    }

    /// Rule index of each message under the default policy
    const RULE_ORDER: [&str; 6] = [TOO_SHORT, TOO_LONG, SPACES, DIGIT, UPPER, LOWER];

    /// A password of exactly `length` characters cycling through `alphabet`.
    fn build(alphabet: &str, length: usize) -> String {
        alphabet.chars().cycle().take(length).collect()
    }

    fn assert_reported_once_in_order(messages: &[String], expected: &str, context: &str) {
        let hits = messages.iter().filter(|m| m.as_str() == expected).count();
        assert_eq!(hits, 1, "{}: {:?}", context, messages);

        let positions: Vec<_> = messages
            .iter()
            .map(|m| RULE_ORDER.iter().position(|r| r == m).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(positions, sorted, "{}: out of order {:?}", context, messages);
    }

    #[test]
    fn test_every_short_length_reports_too_short() {
        for length in 0..10 {
            let password = "a".repeat(length);
            let messages = validate_password(&password);
            assert!(messages.contains(&TOO_SHORT.to_string()), "length {}", length);
            assert!(!messages.contains(&TOO_LONG.to_string()));
        }
    }

    #[test]
    fn test_every_accepted_length_is_valid() {
        for length in 10..=24 {
            let password = build("Aa1", length);
            assert!(validate_password(&password).is_empty(), "length {}", length);
        }
    }

    #[test]
    fn test_every_long_length_reports_too_long() {
        for length in 25..=40 {
            let password = format!("Aa1{}", "x".repeat(length - 3));
            assert_eq!(validate_password(&password), vec![TOO_LONG], "length {}", length);
        }
    }

    #[test]
    fn test_missing_class_sweep() {
        let cases = [("Aa", DIGIT), ("a1", UPPER), ("A1", LOWER)];

        for length in 0..=30 {
            for (alphabet, expected) in cases {
                let password = build(alphabet, length);
                let messages = validate_password(&password);
                let context = format!("{:?} (length {})", password, length);
                assert_reported_once_in_order(&messages, expected, &context);
            }
        }
    }

    #[test]
    fn test_space_sweep() {
        for length in 0..=30 {
            let mut password = build("Aa1", length);
            password.insert(length / 2, ' ');
            let messages = validate_password(&password);
            let context = format!("{:?} (length {})", password, length + 1);
            assert_reported_once_in_order(&messages, SPACES, &context);
        }
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        assert!(validate_password("Abcdefgh12").is_empty());
        assert!(validate_password("Abcdefghijklmnopqrstuv12").is_empty());
        assert_eq!(validate_password("Abcdefgh1"), vec![TOO_SHORT]);
        assert_eq!(validate_password("Abcdefghijklmnopqrstuvw12"), vec![TOO_LONG]);
    }

    #[test]
    fn test_length_counts_utf16_units_not_bytes() {
        // 10 units, 20 bytes
        let password = "Aa1ééééééé";
        assert_eq!(password_length(password), 10);
        assert!(validate_password(password).is_empty());
    }

    #[test]
    fn test_astral_characters_count_twice() {
        // 7 characters, 11 UTF-16 units
        let password = "Aa1😀😀😀😀";
        assert_eq!(password.chars().count(), 7);
        assert_eq!(password_length(password), 11);
        assert!(validate_password(password).is_empty());

        // 14 characters, 25 UTF-16 units
        let long = format!("Aa1{}", "😀".repeat(11));
        assert_eq!(password_length(&long), 25);
        assert_eq!(validate_password(&long), vec![TOO_LONG]);
    }

    #[test]
    fn test_space_anywhere_is_rejected() {
        for password in [" Password123", "Pass word123", "Password123 "] {
            assert_eq!(validate_password(password), vec![SPACES], "{:?}", password);
        }
    }

    #[test]
    fn test_other_whitespace_is_not_a_space() {
        assert!(validate_password("Password\t123").is_empty());
    }

    #[test]
    fn test_missing_character_classes() {
        assert_eq!(validate_password("Passwordxyz"), vec![DIGIT]);
        assert_eq!(validate_password("password123"), vec![UPPER]);
        assert_eq!(validate_password("PASSWORD123"), vec![LOWER]);
    }

    #[test]
    fn test_non_ascii_letters_do_not_satisfy_case_rules() {
        assert_eq!(validate_password("ÄÖÜäöü12345"), vec![UPPER, LOWER]);
    }

    #[test]
    fn test_all_rules_can_fire_together_in_order() {
        let password = format!("{} ", "!".repeat(30));
        assert_eq!(validate_password(&password), vec![TOO_LONG, SPACES, DIGIT, UPPER, LOWER]);

        assert_eq!(validate_password(" "), vec![TOO_SHORT, SPACES, DIGIT, UPPER, LOWER]);
    }

    #[test]
    fn test_no_duplicate_messages() {
        for password in ["", " ", "a b c", "ABC", "123", "        "] {
            let messages = validate_password(password);
            let mut deduped = messages.clone();
            deduped.dedup();
            assert_eq!(messages, deduped);
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let policy = PasswordPolicy::default();
        for password in ["", "short", "Password123", "no digits here at all!!"] {
            assert_eq!(policy.validate(password), policy.validate(password));
        }
    }

    #[test]
    fn test_first_violation_mode_truncates() {
        let policy = PasswordPolicy::default();
        assert_eq!(
            policy.validate_with_mode("short", ValidationMode::FirstViolation),
            vec![TOO_SHORT]
        );
        assert!(policy
            .validate_with_mode("Password123", ValidationMode::FirstViolation)
            .is_empty());
    }

    #[test]
    fn test_custom_policy_formats_bounds() {
        let policy = PasswordPolicy::new(4, 6).unwrap();
        assert_eq!(
            policy.validate("Ab1"),
            vec!["Password must be at least 4 characters long"]
        );
        assert_eq!(
            policy.validate("Abc1234"),
            vec!["Password must be at most 6 characters long"]
        );
    }

    #[test]
    fn test_invalid_policy_bounds() {
        assert!(PasswordPolicy::new(0, 10).is_err());
        assert!(PasswordPolicy::new(12, 8).is_err());
        assert!(PasswordPolicy::new(8, 8).is_ok());
    }

    #[test]
    fn test_rules_match_violation_order() {
        let rules = PasswordPolicy::default().rules();
        let codes: Vec<_> = rules.iter().map(PasswordRule::code).collect();
        assert_eq!(
            codes,
            vec![
                "too_short",
                "too_long",
                "contains_space",
                "missing_digit",
                "missing_uppercase",
                "missing_lowercase"
            ]
        );
    }

    #[test]
    fn test_validation_mode_from_str() {
        assert_eq!("accumulate".parse::<ValidationMode>().unwrap(), ValidationMode::Accumulate);
        assert_eq!(" FIRST ".parse::<ValidationMode>().unwrap(), ValidationMode::FirstViolation);
        assert!("strict".parse::<ValidationMode>().is_err());
        assert_eq!(ValidationMode::FirstViolation.to_string(), "first");
    }
}
