/// Storage-specific errors
use mongodb::error::ErrorKind;
use roster_core::RosterError;
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Client could not be configured from the connection string
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Error reported by the MongoDB driver
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    /// Insert succeeded but the generated `_id` was not an ObjectId
    #[error("Unexpected inserted id: {0}")]
    UnexpectedId(String),
}

impl From<StorageError> for RosterError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Mongo(ref e) if matches!(*e.kind, ErrorKind::BsonDeserialization(_)) => {
                RosterError::decode(e.to_string())
            }
            other => RosterError::store(other.to_string()),
        }
    }
}
