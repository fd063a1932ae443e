//! Person repository for async database operations.
//!
//! Provides create and read operations for the persons table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::{DatabaseErrorConverter, StorageResult};
use crate::models::{NewPerson, Person};
use crate::repositories::PersonStore;

/// Person repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap.
#[derive(Clone)]
pub struct PersonRepository {
    pool: AsyncDbPool,
}

impl PersonRepository {
    /// Creates a new PersonRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonStore for PersonRepository {
    async fn create(&self, new_person: NewPerson) -> StorageResult<Uuid> {
        use crate::schema::persons::dsl::*;
        const OP: &str = "persons.create";

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| DatabaseErrorConverter::convert_pool_error(e, OP))?;

        diesel::insert_into(persons)
            .values(&new_person)
            .returning(id)
            .get_result(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, OP))
    }

    async fn get_by_id(&self, person_id: Uuid) -> StorageResult<Person> {
        use crate::schema::persons::dsl::*;
        const OP: &str = "persons.get_by_id";

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| DatabaseErrorConverter::convert_pool_error(e, OP))?;

        persons
            .filter(id.eq(person_id))
            .select(Person::as_select())
            .first(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, OP))
    }

    async fn get_all(&self) -> StorageResult<Vec<Person>> {
        use crate::schema::persons::dsl::*;
        const OP: &str = "persons.get_all";

        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| DatabaseErrorConverter::convert_pool_error(e, OP))?;

        persons
            .select(Person::as_select())
            .load(&mut conn)
            .await
            .map_err(|e| DatabaseErrorConverter::convert_diesel_error(e, OP))
    }
}
