//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// HTTP API for registering and reading person records
#[derive(Parser, Debug)]
#[command(name = "persons-rs")]
#[command(about = "HTTP API for registering and reading person records")]
#[command(long_about = "
persons-rs serves a small JSON API for person records stored in PostgreSQL.

EXAMPLES:
    # Start the server with the layered configuration in ./config
    persons-rs serve

    # Start server on custom host and port
    persons-rs serve --host 0.0.0.0 --port 8080

    # Use a single configuration file
    persons-rs --config /etc/persons/config.yaml serve

    # Production tier with quiet logging
    persons-rs --env prod --quiet serve

    # Check configuration without starting server
    persons-rs serve --dry-run

    # Apply, preview or undo schema migrations
    persons-rs migrate
    persons-rs migrate --dry-run
    persons-rs migrate --rollback 1
    persons-rs migrate --reset

The database password is read from the DB_PASSWORD environment variable.
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Load this YAML file instead of the layered files in the
    /// configuration directory. Environment overrides still apply.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override the deployment tier (otherwise PERSONS_APP_ENV, then local)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the web server (default)
    ///
    /// Examples:
    ///   persons-rs serve                           # Start with defaults
    ///   persons-rs serve --host 0.0.0.0 --port 80 # Bind to all interfaces on port 80
    ///   persons-rs serve --dry-run                 # Validate config without starting
    Serve {
        /// Host address to bind to
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        #[arg(short, long, value_name = "PORT", value_parser = super::validation::validate_port)]
        port: Option<u16>,

        /// Validate configuration and exit
        #[arg(long)]
        dry_run: bool,
    },
    /// Database migration operations
    ///
    /// Without flags, applies every pending migration.
    Migrate {
        /// Show pending migrations without applying
        #[arg(long, conflicts_with_all = ["rollback", "reset"])]
        dry_run: bool,

        /// Revert the given number of most recent migrations
        #[arg(long, value_name = "STEPS", conflicts_with = "reset", value_parser = super::validation::validate_rollback_steps)]
        rollback: Option<u32>,

        /// Revert every migration, then apply them all again (drops all data)
        #[arg(long)]
        reset: bool,
    },
}

/// Deployment tier as accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(name = "local")]
    Local,
    #[value(name = "development", alias = "dev")]
    Development,
    #[value(name = "production", alias = "prod")]
    Production,
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Local => crate::config::Environment::Local,
            Environment::Development => crate::config::Environment::Development,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}
