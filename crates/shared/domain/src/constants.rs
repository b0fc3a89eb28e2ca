//! Domain-level constants.
//!
//! These constants define registration rules and validation requirements.

// =============================================================================
// Password Policy
// =============================================================================

/// Minimum password length requirement (in characters)
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 10;

/// Maximum password length requirement (in characters)
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 24;

/// Character a password may never contain
pub const FORBIDDEN_PASSWORD_CHAR: char = ' ';

// =============================================================================
// Form Fields
// =============================================================================

/// Field key for the username input
pub const FIELD_USERNAME: &str = "username";

/// Field key for the password input
pub const FIELD_PASSWORD: &str = "password";

// =============================================================================
// Validation Modes
// =============================================================================

/// Report every violated password rule
pub const MODE_ACCUMULATE: &str = "accumulate";

/// Report only the first violated password rule
pub const MODE_FIRST_VIOLATION: &str = "first";

/// All valid validation mode values
pub const VALID_MODES: &[&str] = &[MODE_ACCUMULATE, MODE_FIRST_VIOLATION];
