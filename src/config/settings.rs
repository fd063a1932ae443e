//! Configuration settings structures for persons-rs
//!
//! This module defines all configuration structures that can be loaded from
//! YAML files and environment variables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::logger::{LogFormat, LoggerConfig};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "persons-rs".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    10
}

fn default_shutdown_timeout() -> u64 {
    10
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_username() -> String {
    "postgres".to_string()
}

fn default_db_name() -> String {
    "persons".to_string()
}

fn default_ssl_mode() -> String {
    "disable".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Maximum time in seconds to drain in-flight requests on shutdown
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

// ============================================================================
// Database Configuration
// ============================================================================

/// PostgreSQL connection and pool configuration
///
/// The password is normally injected from `DB_PASSWORD` and is never
/// written back out when settings are serialized.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_host")]
    pub host: String,

    #[serde(default = "default_db_port")]
    pub port: u16,

    #[serde(default = "default_db_username")]
    pub username: String,

    #[serde(default, skip_serializing)]
    pub password: String,

    #[serde(default = "default_db_name")]
    pub dbname: String,

    /// libpq `sslmode` value
    #[serde(default = "default_ssl_mode")]
    pub ssl_mode: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum number of idle connections kept in the pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Whether to apply pending migrations when the server starts
    #[serde(default)]
    pub auto_migrate: bool,
}

impl DatabaseConfig {
    /// Builds a libpq key/value connection string.
    ///
    /// Both the blocking migration connection and the async pool accept
    /// this form, so the password never has to be URL-encoded.
    pub fn connection_string(&self) -> String {
        let mut parts = vec![
            format!("host={}", quote_conninfo_value(&self.host)),
            format!("port={}", self.port),
            format!("user={}", quote_conninfo_value(&self.username)),
        ];
        if !self.password.is_empty() {
            parts.push(format!("password={}", quote_conninfo_value(&self.password)));
        }
        parts.push(format!("dbname={}", quote_conninfo_value(&self.dbname)));
        parts.push(format!("sslmode={}", quote_conninfo_value(&self.ssl_mode)));
        parts.join(" ")
    }
}

/// Quotes a conninfo value when it is empty or contains whitespace, quotes
/// or backslashes.
fn quote_conninfo_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '\\');
    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("dbname", &self.dbname)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connection_timeout", &self.connection_timeout)
            .field("auto_migrate", &self.auto_migrate)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_db_host(),
            port: default_db_port(),
            username: default_db_username(),
            password: String::new(),
            dbname: default_db_name(),
            ssl_mode: default_ssl_mode(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
            auto_migrate: false,
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Logger configuration as it appears in configuration files.
///
/// `level` and `format` fall back to the deployment tier's defaults when
/// left unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Log format: "full", "compact", or "json"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Whether to use colored output when writing to a terminal
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: None,
            format: None,
            colored: default_true(),
        }
    }
}

impl LoggerSettings {
    /// Resolve these settings into the runtime `LoggerConfig` for a tier
    pub fn into_logger_config(self, environment: Environment) -> Result<LoggerConfig, ConfigError> {
        let level = self
            .level
            .unwrap_or_else(|| environment.default_log_level().to_string());
        let format = match self.format {
            Some(format) => format
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::validation("logger.format", e.to_string()))?,
            None => environment.default_log_format(),
        };

        LoggerConfig::new(level, format, self.colored)
            .map_err(|e| ConfigError::validation("logger", e.to_string()))
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from YAML files and environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Deployment tier these settings were loaded for
    #[serde(default)]
    pub environment: Environment,

    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

impl Settings {
    /// Runtime logger configuration for these settings
    pub fn logger_config(&self) -> Result<LoggerConfig, ConfigError> {
        self.logger.clone().into_logger_config(self.environment)
    }
}
