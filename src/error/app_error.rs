use thiserror::Error;

use crate::error::StorageError;

/// Application-wide error type returned by services and handlers.
///
/// Every variant belongs to exactly one [`ErrorKind`], which is all the
/// transport layer looks at when choosing a status code.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// A record with the same unique key is already stored
    #[error("Already exists: {entity} violates {constraint}")]
    AlreadyExists { entity: String, constraint: String },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

/// Coarse classification of [`AppError`] used for the HTTP status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    BadRequest,
    Internal,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::AlreadyExists { .. } => ErrorKind::Conflict,
            AppError::BadRequest { .. } => ErrorKind::BadRequest,
            AppError::Database { .. } | AppError::Internal { .. } => ErrorKind::Internal,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }

    /// Lifts a persistence error, naming the entity and lookup key involved.
    pub fn from_storage(error: StorageError, entity: &str, field: &str, value: &str) -> Self {
        match error {
            StorageError::NotFound => AppError::NotFound {
                entity: entity.to_string(),
                field: field.to_string(),
                value: value.to_string(),
            },
            StorageError::AlreadyExists { constraint } => AppError::AlreadyExists {
                entity: entity.to_string(),
                constraint,
            },
            StorageError::Storage { operation, source } => {
                AppError::Database { operation, source }
            }
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let cases = [
            (
                AppError::NotFound {
                    entity: "person".into(),
                    field: "id".into(),
                    value: "x".into(),
                },
                ErrorKind::NotFound,
            ),
            (
                AppError::AlreadyExists {
                    entity: "person".into(),
                    constraint: "persons_email_key".into(),
                },
                ErrorKind::Conflict,
            ),
            (AppError::bad_request("nope"), ErrorKind::BadRequest),
            (
                AppError::Database {
                    operation: "insert".into(),
                    source: anyhow::anyhow!("boom"),
                },
                ErrorKind::Internal,
            ),
            (anyhow::anyhow!("boom").into(), ErrorKind::Internal),
        ];

        for (error, kind) in cases {
            assert_eq!(error.kind(), kind, "{error}");
        }
    }

    #[test]
    fn test_from_storage_keeps_context() {
        let err = AppError::from_storage(StorageError::NotFound, "person", "id", "42");
        assert_eq!(err.to_string(), "Resource not found: person with id=42");

        let err = AppError::from_storage(
            StorageError::AlreadyExists {
                constraint: "persons_email_key".into(),
            },
            "person",
            "email",
            "a@b.c",
        );
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let err = AppError::from_storage(
            StorageError::storage("persons.insert", anyhow::anyhow!("connection reset")),
            "person",
            "email",
            "a@b.c",
        );
        match err {
            AppError::Database { operation, source } => {
                assert_eq!(operation, "persons.insert");
                assert_eq!(source.to_string(), "connection reset");
            }
            other => panic!("Expected Database error, got {other:?}"),
        }
    }
}
