//! Serve command handler
//!
//! Runs the HTTP server, or only reports the effective configuration on
//! `--dry-run`.

use crate::config::Settings;
use crate::server::Server;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    /// Create a new serve command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the serve command with optional dry-run support
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - Server startup errors (if not dry-run)
    pub async fn execute(self, dry_run: bool) -> anyhow::Result<()> {
        if dry_run {
            self.validate_only()
        } else {
            Server::new(self.config).run().await
        }
    }

    /// Validate configuration and print what the server would use
    pub fn validate_only(&self) -> anyhow::Result<()> {
        self.config.validate()?;
        let logger = self.config.logger_config()?;
        let database = &self.config.database;

        println!("✓ Configuration is valid ({} tier)", self.config.environment);
        println!("✓ Server would bind to: {}", self.config.server.address());
        println!(
            "✓ Database: {}@{}:{}/{} (sslmode={}, password {})",
            database.username,
            database.host,
            database.port,
            database.dbname,
            database.ssl_mode,
            if database.password.is_empty() { "not set" } else { "set" }
        );
        println!("✓ Logger: level={}, format={}", logger.level, logger.format);
        println!("Dry run completed successfully - configuration is ready for deployment");
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &Settings {
        &self.config
    }
}
