//! Configuration management module for persons-rs
//!
//! This module provides layered configuration loading with support for:
//! - YAML configuration files
//! - Environment variable overrides
//! - Multiple deployment tiers (local, development, production)
//!
//! # Configuration Priority (lowest to highest)
//! 1. `default.yaml` - Base default configuration
//! 2. `{environment}.yaml` - Tier-specific configuration
//! 3. `local.yaml` - Local developer overrides (not committed to version control)
//! 4. `PERSONS_*` environment variables
//! 5. `DB_PASSWORD` for the database password

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

// Re-export public types
pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{ApplicationConfig, DatabaseConfig, LoggerSettings, ServerConfig, Settings};
