//! Schema migrations over a blocking diesel connection.
//!
//! `diesel_migrations` only drives synchronous connections, so every
//! operation opens a `PgConnection` on the blocking thread pool.

use anyhow::{Context, anyhow};
use diesel::Connection;
use diesel::migration::Migration;
use diesel::pg::PgConnection;
use diesel_migrations::MigrationHarness;

use crate::config::DatabaseConfig;
use crate::db::MIGRATIONS;

/// Applies, lists and reverts the embedded migrations.
#[derive(Clone)]
pub struct Migrator {
    connection_string: String,
}

impl Migrator {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            connection_string: config.connection_string(),
        }
    }

    /// Names of the migrations not yet applied.
    pub async fn pending(&self) -> anyhow::Result<Vec<String>> {
        self.with_connection("list pending migrations", |conn| {
            let pending = conn.pending_migrations(MIGRATIONS).map_err(|e| anyhow!(e))?;
            Ok(pending.iter().map(|m| m.name().to_string()).collect())
        })
        .await
    }

    /// Applies every pending migration and returns their versions.
    pub async fn run_pending(&self) -> anyhow::Result<Vec<String>> {
        self.with_connection("run pending migrations", |conn| {
            let applied = conn
                .run_pending_migrations(MIGRATIONS)
                .map_err(|e| anyhow!(e))?;
            Ok(applied.iter().map(ToString::to_string).collect())
        })
        .await
    }

    /// Reverts the `steps` most recent migrations, newest first.
    ///
    /// Fails without touching the schema when fewer migrations are applied.
    pub async fn revert(&self, steps: u32) -> anyhow::Result<Vec<String>> {
        self.with_connection("revert migrations", move |conn| {
            let applied = conn.applied_migrations().map_err(|e| anyhow!(e))?;
            if applied.len() < steps as usize {
                anyhow::bail!(
                    "Cannot rollback {} migrations - only {} applied migrations available",
                    steps,
                    applied.len()
                );
            }

            (0..steps)
                .map(|_| {
                    conn.revert_last_migration(MIGRATIONS)
                        .map(|v| v.to_string())
                        .map_err(|e| anyhow!(e))
                })
                .collect()
        })
        .await
    }

    /// Reverts every applied migration, then re-applies all of them.
    ///
    /// Returns the reverted and the applied versions. All data is lost.
    pub async fn reset(&self) -> anyhow::Result<(Vec<String>, Vec<String>)> {
        self.with_connection("reset migrations", |conn| {
            // Returned versions borrow the connection, so collect before reusing it
            let reverted: Vec<String> = conn
                .revert_all_migrations(MIGRATIONS)
                .map_err(|e| anyhow!(e))?
                .iter()
                .map(ToString::to_string)
                .collect();
            let applied: Vec<String> = conn
                .run_pending_migrations(MIGRATIONS)
                .map_err(|e| anyhow!(e))?
                .iter()
                .map(ToString::to_string)
                .collect();
            Ok((reverted, applied))
        })
        .await
    }

    async fn with_connection<T, F>(&self, operation: &'static str, f: F) -> anyhow::Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> anyhow::Result<T> + Send + 'static,
    {
        let connection_string = self.connection_string.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = PgConnection::establish(&connection_string)
                .with_context(|| format!("failed to connect to database to {operation}"))?;
            f(&mut conn).with_context(|| format!("failed to {operation}"))
        })
        .await
        .context("migration task panicked")?
    }
}
