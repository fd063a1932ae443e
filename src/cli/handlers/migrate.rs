//! Migrate command handler
//!
//! Applies, previews, rolls back or resets the embedded schema migrations.

use crate::config::Settings;
use crate::db::Migrator;

/// What `migrate` should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Apply every pending migration
    Apply,
    /// List pending migrations without applying them
    DryRun,
    /// Revert this many of the most recent migrations
    Rollback(u32),
    /// Revert everything, then apply everything
    Reset,
}

impl MigrateAction {
    /// Resolve the `migrate` flags; clap keeps them mutually exclusive
    pub fn from_flags(dry_run: bool, rollback: Option<u32>, reset: bool) -> Self {
        match (dry_run, rollback, reset) {
            (true, _, _) => MigrateAction::DryRun,
            (_, Some(steps), _) => MigrateAction::Rollback(steps),
            (_, _, true) => MigrateAction::Reset,
            _ => MigrateAction::Apply,
        }
    }
}

/// Handler for the migrate command
pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    /// Create a new migrate command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the requested migration action
    ///
    /// # Errors
    /// - Invalid rollback step count
    /// - Database connection errors
    /// - Migration execution errors
    pub async fn execute(&self, action: MigrateAction) -> anyhow::Result<()> {
        if action == MigrateAction::Rollback(0) {
            anyhow::bail!("Number of rollback steps must be greater than 0");
        }
        self.config.database.validate()?;

        let migrator = Migrator::new(&self.config.database);
        match action {
            MigrateAction::DryRun => {
                println!("Checking for pending migrations...");
                let pending = migrator.pending().await?;
                if pending.is_empty() {
                    println!("✓ No pending migrations found - database is up to date");
                } else {
                    println!("Found {} pending migration(s):", pending.len());
                    print_list(&pending);
                    println!("\nRun without --dry-run to apply these migrations");
                }
            }
            MigrateAction::Apply => {
                println!("Running database migrations...");
                let applied = migrator.run_pending().await?;
                if applied.is_empty() {
                    println!("✓ No migrations to apply - database is already up to date");
                } else {
                    println!("✓ Applied {} migration(s):", applied.len());
                    print_list(&applied);
                }
            }
            MigrateAction::Rollback(steps) => {
                println!("Rolling back {} migration(s)...", steps);
                let reverted = migrator.revert(steps).await?;
                println!("✓ Rolled back {} migration(s):", reverted.len());
                print_list(&reverted);
            }
            MigrateAction::Reset => {
                println!("Resetting database schema...");
                let (reverted, applied) = migrator.reset().await?;
                println!("✓ Reverted {} migration(s):", reverted.len());
                print_list(&reverted);
                println!("✓ Applied {} migration(s):", applied.len());
                print_list(&applied);
            }
        }

        tracing::info!(action = ?action, "Migration command completed");
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &Settings {
        &self.config
    }
}

fn print_list(names: &[String]) {
    for name in names {
        println!("  - {}", name);
    }
}
