//! Logger Module
//!
//! Console logging based on `tracing-subscriber` with:
//! - Level filtering through `EnvFilter`
//! - Human-readable (full, compact) or JSON output
//! - Color control for terminals

pub mod config;
pub mod error;

// Re-export main types
pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global logger with the given configuration
///
/// # Errors
///
/// Fails when the configuration is invalid or a global subscriber is
/// already installed.
pub fn init_logger(config: LoggerConfig) -> Result<(), LoggerError> {
    config
        .validate()
        .map_err(|e| LoggerError::config(format!("{:#}", e)))?;

    let filter = build_filter(&config)?;
    let use_ansi = config.colored && std::io::stdout().is_terminal();
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Full => registry
            .with(
                fmt::layer()
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init()?,
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_ansi(use_ansi)
                    .with_target(true)
                    .compact(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .json()
                    .with_current_span(true),
            )
            .try_init()?,
    }

    Ok(())
}

fn build_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let level = config
        .parse_level()
        .map_err(|e| LoggerError::config(e.to_string()))?;
    Ok(EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(""))
}
