use thiserror::Error;

/// Outcome classes of a persistence call.
///
/// Callers branch on the variant, never on the message.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No row matched the lookup
    #[error("record not found")]
    NotFound,

    /// A unique constraint rejected the write
    #[error("record already exists (constraint {constraint})")]
    AlreadyExists { constraint: String },

    /// Any other failure, tagged with the operation that hit it
    #[error("storage operation '{operation}' failed")]
    Storage {
        operation: String,
        #[source]
        source: anyhow::Error,
    },
}

impl StorageError {
    /// Wraps an arbitrary failure under an operation tag.
    pub fn storage(operation: impl Into<String>, source: impl Into<anyhow::Error>) -> Self {
        StorageError::Storage {
            operation: operation.into(),
            source: source.into(),
        }
    }
}

/// Type alias for persistence results
pub type StorageResult<T> = Result<T, StorageError>;
