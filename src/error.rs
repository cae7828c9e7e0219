//! Error types for the contact manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ContactField;
use thiserror::Error;

/// Errors that can occur when adding contacts.
#[derive(Error, Debug)]
pub enum ContactError {
    /// A required contact field was absent
    #[error("Invalid argument: {field} cannot be null")]
    InvalidArgument { field: ContactField },

    /// Failed to parse a JSON contact request
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContactError {
    /// Returns the missing field for `InvalidArgument` errors.
    pub fn missing_field(&self) -> Option<ContactField> {
        match self {
            Self::InvalidArgument { field } => Some(*field),
            Self::Json(_) => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
