//! Domain layer - Registration rules and validation findings.
//!
//! This crate contains pure validation logic with no I/O or UI concerns.
//! The form component and its host both build on these types.

pub mod constants;
pub mod error;
pub mod error_state;
pub mod password;
pub mod registration;
pub mod username;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use error_state::ErrorState;
pub use password::{
    password_length, validate_password, PasswordPolicy, PasswordRule, ValidationMode,
};
pub use registration::{validate_credentials, Credentials, Findings, ValidationOptions};
pub use username::{username_violation, validate_username, UsernameRule};
