//! Server module for managing HTTP server lifecycle
//!
//! This module handles server initialization, startup, and graceful shutdown.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::Notify;

use crate::api::routes::create_router;
use crate::config::Settings;
use crate::db::{Migrator, establish_async_connection_pool};
use crate::state::AppState;

/// HTTP server manager
pub struct Server {
    settings: Settings,
}

impl Server {
    /// Create a new server with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Start the server and run until shutdown signal
    ///
    /// This method:
    /// 1. Applies pending migrations when `database.auto_migrate` is set
    /// 2. Initializes the database connection pool
    /// 3. Binds to the configured address
    /// 4. Serves requests until Ctrl+C or SIGTERM, then drains in-flight
    ///    requests for at most `server.shutdown_timeout` seconds
    ///
    /// # Errors
    /// - Migration or connection pool initialization errors
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> anyhow::Result<()> {
        let Settings {
            environment,
            application,
            server,
            database,
            ..
        } = &self.settings;

        tracing::info!(
            app_name = %application.name,
            app_version = %application.version,
            environment = %environment,
            "Application starting"
        );
        tracing::info!(
            host = %server.host,
            port = server.port,
            request_timeout = server.request_timeout,
            shutdown_timeout = server.shutdown_timeout,
            "Server configuration loaded"
        );
        tracing::info!(
            db_host = %database.host,
            db_name = %database.dbname,
            max_connections = database.max_connections,
            min_connections = database.min_connections,
            "Database configuration loaded"
        );

        if database.auto_migrate {
            let applied = Migrator::new(database).run_pending().await?;
            tracing::info!(count = applied.len(), migrations = ?applied, "Migrations applied");
        }

        let pool = establish_async_connection_pool(database).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to initialize database connection pool");
            e
        })?;
        tracing::info!("Database connection pool initialized");

        let router = create_router(AppState::new(pool), server);

        let address = server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            anyhow::anyhow!("Failed to bind to {}: {}", address, e)
        })?;

        tracing::info!(address = %address, "Server listening");

        let signalled = Arc::new(Notify::new());
        let trigger = signalled.clone();
        let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
            shutdown_signal().await;
            trigger.notify_one();
        });

        // In-flight requests get `shutdown_timeout` seconds once a signal arrives
        let drain_timeout = Duration::from_secs(server.shutdown_timeout);
        let drain_deadline = async {
            signalled.notified().await;
            tokio::time::sleep(drain_timeout).await;
        };

        tokio::select! {
            result = async { serve.await } => {
                result?;
                tracing::info!("Server shutdown complete");
            }
            _ = drain_deadline => {
                tracing::warn!(
                    timeout_secs = server.shutdown_timeout,
                    "Graceful shutdown timed out, dropping remaining connections"
                );
            }
        }

        Ok(())
    }
}

/// Waits for a shutdown signal (Ctrl+C or SIGTERM).
///
/// A signal handler that cannot be installed is logged and never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
