use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::pooled_connection::PoolError;

use crate::error::StorageError;

/// Fallback constraint name when the server does not report one.
const UNKNOWN_CONSTRAINT: &str = "unique";

/// Utility for classifying diesel and pool failures into [`StorageError`].
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to the matching `StorageError` variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Tag of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> StorageError {
        match error {
            DieselError::NotFound => StorageError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                StorageError::AlreadyExists {
                    constraint: info
                        .constraint_name()
                        .unwrap_or(UNKNOWN_CONSTRAINT)
                        .to_string(),
                }
            }
            other => StorageError::storage(operation, other),
        }
    }

    /// Converts a failure to check a connection out of the pool.
    pub fn convert_pool_error(error: bb8::RunError<PoolError>, operation: &str) -> StorageError {
        StorageError::storage(operation, error)
    }
}
