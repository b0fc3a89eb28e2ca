//! Common utilities shared by the form and its host.
//!
//! This crate provides:
//! - Unified error handling
//! - Configuration loaded from the environment
//! - Tracing setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult};
pub use telemetry::init_tracing;
