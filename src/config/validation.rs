//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{DatabaseConfig, LoggerSettings, ServerConfig, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// `sslmode` values the async pool can honor, since it connects without TLS
const VALID_SSL_MODES: &[&str] = &["disable", "prefer"];

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Host must not be empty
    /// - Port must be between 1 and 65535
    /// - Request and shutdown timeouts must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "server.host",
                "Host cannot be empty. Use 127.0.0.1 or 0.0.0.0.",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.shutdown_timeout == 0 {
            return Err(ConfigError::validation(
                "server.shutdown_timeout",
                "Shutdown timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    /// Validate database configuration
    ///
    /// # Validation Rules
    /// - Host, username and database name must not be empty
    /// - Port must not be 0
    /// - `ssl_mode` must be `disable` or `prefer`
    /// - 1 <= min connections <= max connections
    /// - Connection timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation(
                "database.host",
                "Database host is required.",
            ));
        }

        if self.port == 0 {
            return Err(ConfigError::validation(
                "database.port",
                "Database port must be between 1 and 65535.",
            ));
        }

        if self.username.trim().is_empty() {
            return Err(ConfigError::validation(
                "database.username",
                "Database username is required.",
            ));
        }

        if self.dbname.trim().is_empty() {
            return Err(ConfigError::validation(
                "database.dbname",
                "Database name is required.",
            ));
        }

        if !VALID_SSL_MODES.contains(&self.ssl_mode.as_str()) {
            return Err(ConfigError::validation(
                "database.ssl_mode".to_string(),
                format!(
                    "Invalid ssl_mode '{}'. Valid values are: {}",
                    self.ssl_mode,
                    VALID_SSL_MODES.join(", ")
                ),
            ));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Max connections must be greater than 0.",
            ));
        }

        if self.min_connections == 0 {
            return Err(ConfigError::validation(
                "database.min_connections",
                "Min connections must be greater than 0.",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections".to_string(),
                format!(
                    "Min connections ({}) cannot exceed max connections ({}).",
                    self.min_connections, self.max_connections
                ),
            ));
        }

        if self.connection_timeout == 0 {
            return Err(ConfigError::validation(
                "database.connection_timeout",
                "Connection timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings that are explicitly set
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(level) = &self.level
            && !VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str())
        {
            return Err(ConfigError::validation(
                "logger.level".to_string(),
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if let Some(format) = &self.format
            && !VALID_LOG_FORMATS.contains(&format.to_lowercase().as_str())
        {
            return Err(ConfigError::validation(
                "logger.format".to_string(),
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate every configuration section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}
