//! Configuration loader for persons-rs
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
pub const CONFIG_DIR_ENV: &str = "PERSONS_CONFIG_DIR";

/// Environment variable for specific configuration file
pub const CONFIG_FILE_ENV: &str = "PERSONS_CONFIG_FILE";

/// Environment variable holding the database password
pub const DB_PASSWORD_ENV: &str = "DB_PASSWORD";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "PERSONS";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. `default.yaml` - Base default configuration (required)
/// 2. `{environment}.yaml` - Tier-specific configuration (optional)
/// 3. `local.yaml` - Local overrides (optional)
/// 4. `PERSONS_*` environment variables
/// 5. `DB_PASSWORD` (highest priority, database password only)
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Deployment tier
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// This reads environment variables to determine:
    /// - Configuration directory (`PERSONS_CONFIG_DIR`)
    /// - Specific configuration file (`PERSONS_CONFIG_FILE`)
    /// - Deployment tier (`PERSONS_APP_ENV`)
    ///
    /// # Errors
    ///
    /// Returns an error if both `PERSONS_CONFIG_DIR` and `PERSONS_CONFIG_FILE` are set.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from);
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_dir.is_some() && config_file.is_some() {
            return Err(ConfigError::MutualExclusivityError(format!(
                "{CONFIG_DIR_ENV} and {CONFIG_FILE_ENV} cannot both be set. \
                 Use {CONFIG_DIR_ENV} for layered configuration or \
                 {CONFIG_FILE_ENV} for a single configuration file."
            )));
        }

        Ok(Self {
            config_dir: config_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Load a single configuration file instead of the layered directory
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Override the deployment tier detected from the environment
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Get the current deployment tier
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Get the configuration directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load configuration from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `default.yaml` (or the explicit file) is not found
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match &self.config_file {
            Some(config_file) => Self::add_file_source(builder, config_file, true)?,
            None => self.build_layered_config(builder)?,
        };

        // PERSONS_SERVER__PORT -> server.port
        let builder = Self::add_env_source(builder);

        let mut builder = builder.set_override("environment", self.environment.as_str())?;
        if let Ok(password) = std::env::var(DB_PASSWORD_ENV)
            && !password.is_empty()
        {
            builder = builder.set_override("database.password", password)?;
        }

        builder.build().map_err(ConfigError::from)
    }

    /// Build layered configuration from multiple files
    fn build_layered_config(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let default_path = self.config_dir.join("default.yaml");
        let builder = Self::add_file_source(builder, &default_path, true)?;

        let env_path = self
            .config_dir
            .join(format!("{}.yaml", self.environment.as_str()));
        let builder = Self::add_file_source(builder, &env_path, false)?;

        // local.yaml doubles as the tier file for the local tier
        if self.environment != AppEnvironment::Local {
            let local_path = self.config_dir.join("local.yaml");
            return Self::add_file_source(builder, &local_path, false);
        }

        Ok(builder)
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(path));
        }

        Ok(builder.add_source(File::from(path).format(FileFormat::Yaml).required(required)))
    }

    /// Environment variables with prefix `PERSONS_` are mapped to configuration keys.
    /// Double underscores (`__`) separate nested keys.
    fn add_env_source(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes every test that touches process environment variables.
    pub(crate) static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Sets environment variables for one test and restores them on drop
    pub(crate) struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        pub(crate) fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        pub(crate) fn set(&mut self, key: &str, value: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        pub(crate) fn remove(&mut self, key: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }

        /// Clears every variable the loader reads
        pub(crate) fn clean() -> Self {
            let mut env = Self::new();
            env.remove(CONFIG_DIR_ENV);
            env.remove(CONFIG_FILE_ENV);
            env.remove(AppEnvironment::ENV_VAR);
            env.remove(DB_PASSWORD_ENV);
            env.remove("PERSONS_SERVER__PORT");
            env.remove("PERSONS_DATABASE__HOST");
            env
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    const DEFAULT_YAML: &str = r#"
application:
  name: test-app
server:
  host: 127.0.0.1
  port: 3000
  request_timeout: 5
database:
  host: db.internal
  port: 5432
  username: persons
  dbname: persons
  ssl_mode: disable
"#;

    #[test]
    fn test_config_loader_new_default() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let _env = EnvGuard::clean();

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.config_dir(), Path::new("config"));
        assert!(loader.config_file.is_none());
        assert_eq!(loader.environment(), AppEnvironment::Local);
    }

    #[test]
    fn test_config_loader_mutual_exclusivity_error() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::clean();
        env.set(CONFIG_DIR_ENV, "/custom/config");
        env.set(CONFIG_FILE_ENV, "/path/to/config.yaml");

        match ConfigLoader::new() {
            Err(ConfigError::MutualExclusivityError(msg)) => {
                assert!(msg.contains(CONFIG_DIR_ENV));
                assert!(msg.contains(CONFIG_FILE_ENV));
            }
            other => panic!("Expected MutualExclusivityError, got {:?}", other),
        }
    }

    #[test]
    fn test_config_loader_environment_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::clean();
        env.set(AppEnvironment::ENV_VAR, "prod");

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.environment(), AppEnvironment::Production);
    }

    #[test]
    fn test_load_missing_default_yaml() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::clean();
        let temp_dir = setup_config_dir(&[]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        match ConfigLoader::new().unwrap().load() {
            Err(ConfigError::FileNotFound(path)) => {
                assert!(path.ends_with("default.yaml"));
            }
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_default_yaml_only() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::clean();
        let temp_dir = setup_config_dir(&[("default.yaml", DEFAULT_YAML)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let settings = ConfigLoader::new().unwrap().load().expect("Should load");
        assert_eq!(settings.application.name, "test-app");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.server.request_timeout, 5);
        assert_eq!(settings.database.host, "db.internal");
        assert_eq!(settings.environment, AppEnvironment::Local);
        assert!(settings.database.password.is_empty());
    }

    #[test]
    fn test_tier_file_overrides_default() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::clean();
        let temp_dir = setup_config_dir(&[
            ("default.yaml", DEFAULT_YAML),
            ("production.yaml", "server:\n  port: 80\nlogger:\n  level: warn\n"),
            ("local.yaml", "server:\n  host: 0.0.0.0\n"),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let settings = ConfigLoader::new()
            .unwrap()
            .with_environment(AppEnvironment::Production)
            .load()
            .unwrap();
        assert_eq!(settings.environment, AppEnvironment::Production);
        assert_eq!(settings.server.port, 80);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.logger.level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_env_vars_override_files() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::clean();
        let temp_dir = setup_config_dir(&[("default.yaml", DEFAULT_YAML)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set("PERSONS_SERVER__PORT", "9090");
        env.set("PERSONS_DATABASE__HOST", "override.internal");

        let settings = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.database.host, "override.internal");
    }

    #[test]
    fn test_db_password_comes_from_environment() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let mut env = EnvGuard::clean();
        let temp_dir = setup_config_dir(&[("default.yaml", DEFAULT_YAML)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set(DB_PASSWORD_ENV, "s3cr3t pass");

        let settings = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(settings.database.password, "s3cr3t pass");
        assert!(
            settings
                .database
                .connection_string()
                .contains("password='s3cr3t pass'")
        );
    }

    #[test]
    fn test_explicit_config_file() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let _env = EnvGuard::clean();
        let temp_dir = setup_config_dir(&[("custom.yaml", "server:\n  port: 7000\n")]);

        let settings = ConfigLoader::new()
            .unwrap()
            .with_config_file(temp_dir.path().join("custom.yaml"))
            .load()
            .unwrap();
        assert_eq!(settings.server.port, 7000);
        assert_eq!(settings.database.dbname, "persons");
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let _env = EnvGuard::clean();
        let temp_dir = setup_config_dir(&[("bad.yaml", "database:\n  ssl_mode: maybe\n")]);

        let result = ConfigLoader::new()
            .unwrap()
            .with_config_file(temp_dir.path().join("bad.yaml"))
            .load();
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
