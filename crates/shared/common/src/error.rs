//! Unified error handling for the host application.
//!
//! Validation findings never appear here; they are data in
//! [`domain::ErrorState`]. These errors are faults: bad configuration,
//! a closed terminal, unserializable output.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Get error code for the user
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(msg) => format!("Invalid configuration: {}", msg),

            AppError::Io(e) => {
                tracing::error!("I/O error: {:?}", e);
                "Could not read input or write output".to_string()
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                "Could not encode output".to_string()
            }
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

// Domain errors only describe unusable rule settings, which come from
// configuration.

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Config(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}
