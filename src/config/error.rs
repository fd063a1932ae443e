//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating, parsing or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required configuration file is missing
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Sources were found but could not be turned into `Settings`
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A value is present but outside its accepted range or format
    #[error("Validation error: {field} - {message}")]
    ValidationError { field: String, message: String },

    /// Unknown deployment tier name
    #[error("Invalid environment '{0}'. Valid values are: local, development, production")]
    InvalidEnvironment(String),

    /// Two configuration selectors that cannot be combined were both set
    #[error("Mutual exclusivity error: {0}")]
    MutualExclusivityError(String),

    /// Error bubbled up from the `config` crate
    #[error("Configuration source error: {0}")]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        ConfigError::FileNotFound(path.into())
    }
}
