//! Core error types for satprep-core.
//!
//! Validation failures are reported through [`ValidationError`]; everything
//! that touches the filesystem or a serializer is folded into [`CoreError`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for satprep-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Home/config directory could not be prepared
    #[error("Failed to prepare config directory {path}: {message}")]
    DirUnavailable { path: PathBuf, message: String },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors raised synchronously by the planning operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Non-positive hours, non-positive score, missing subject, or a
    /// malformed reference entry.
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    /// Month outside 1-12 or a year chrono cannot represent.
    #[error("Invalid date: {year}-{month:02} is not a calendar month")]
    InvalidDate { year: i32, month: u32 },
}

impl ValidationError {
    pub(crate) fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for the `InvalidInput` family.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ValidationError::InvalidInput { .. })
    }

    /// True for the `InvalidDate` family.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ValidationError::InvalidDate { .. })
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_names_field() {
        let err = ValidationError::invalid_input("hours_per_day", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'hours_per_day': must be positive"
        );
        assert!(err.is_invalid_input());
        assert!(!err.is_invalid_date());
    }

    #[test]
    fn invalid_date_pads_month() {
        let err = ValidationError::InvalidDate { year: 2024, month: 0 };
        assert_eq!(err.to_string(), "Invalid date: 2024-00 is not a calendar month");
        assert!(err.is_invalid_date());
    }

    #[test]
    fn validation_error_converts_into_core_error() {
        let core: CoreError = ValidationError::InvalidDate { year: 2024, month: 13 }.into();
        assert!(matches!(core, CoreError::Validation(_)));
        assert!(core.to_string().starts_with("Validation error:"));
    }
}
