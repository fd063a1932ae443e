//! Repository layer for data access operations.
//!
//! [`PersonStore`] is the seam between the service and storage. The diesel
//! backed [`PersonRepository`] serves production, [`InMemoryPersonStore`]
//! serves tests and local experiments.

mod in_memory;
mod person_repo;

pub use in_memory::{EMAIL_UNIQUE_CONSTRAINT, InMemoryPersonStore};
pub use person_repo::PersonRepository;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::StorageResult;
use crate::models::{NewPerson, Person};

/// Persistence operations on person records
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Insert a person and return its id.
    ///
    /// Fails with `StorageError::AlreadyExists` when the id or email is taken.
    async fn create(&self, new_person: NewPerson) -> StorageResult<Uuid>;

    /// Fetch one person, `StorageError::NotFound` when absent.
    async fn get_by_id(&self, id: Uuid) -> StorageResult<Person>;

    /// Every stored person, in storage order.
    async fn get_all(&self) -> StorageResult<Vec<Person>>;
}

/// Aggregates all repositories for convenient access.
#[derive(Clone)]
pub struct Repositories {
    pub persons: Arc<dyn PersonStore>,
}

impl Repositories {
    /// Creates a new Repositories instance backed by PostgreSQL.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            persons: Arc::new(PersonRepository::new(pool)),
        }
    }

    /// Creates a Repositories instance backed by in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            persons: Arc::new(InMemoryPersonStore::new()),
        }
    }
}
