//! Database module.
//!
//! Provides async PostgreSQL connection pooling using diesel_async with bb8,
//! plus the embedded schema migrations.

mod migrations;
mod pool;

pub use migrations::Migrator;
pub use pool::{AsyncDbPool, MIGRATIONS, establish_async_connection_pool};
