//! Error types for the Salesforce integration.
//!
//! [`ServiceFault`] is what the Salesforce API reports back; [`ConfigurationError`]
//! covers the few things this crate can reject on its own.

mod catalog;
mod fault;

pub use catalog::{ErrorCategory, FaultFamily};
pub use fault::{ServiceFault, ServiceResult};

use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A setting has a value outside its allowed range.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message describing the configuration issue.
        message: String,
    },
}

impl ConfigurationError {
    /// Creates an invalid configuration error.
    pub fn invalid(message: impl Into<String>) -> Self {
        ConfigurationError::InvalidConfig {
            message: message.into(),
        }
    }
}
