//! Deployment tier the application runs in

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::LogFormat;

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Developer machine: readable output, debug level
    #[default]
    Local,
    /// Shared development deployment: JSON output, debug level
    Development,
    /// Production deployment: JSON output, info level
    Production,
}

impl Environment {
    /// Environment variable name for reading the current environment
    pub const ENV_VAR: &'static str = "PERSONS_APP_ENV";

    /// Read the environment from the `PERSONS_APP_ENV` environment variable
    ///
    /// Returns `Local` if the variable is not set or cannot be parsed.
    pub fn from_env() -> Self {
        std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Convert the environment to a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// Log level used when the configuration does not set one
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Local | Environment::Development => "debug",
            Environment::Production => "info",
        }
    }

    /// Log format used when the configuration does not set one
    pub fn default_log_format(&self) -> LogFormat {
        match self {
            Environment::Local => LogFormat::Full,
            Environment::Development | Environment::Production => LogFormat::Json,
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
