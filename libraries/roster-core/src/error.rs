/// Core error types for Roster
use std::time::Duration;
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for Roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// Request body failed the required/format checks
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Identifier is not a 24 character hex ObjectId
    #[error("Invalid user id: {0}")]
    InvalidId(String),

    /// Store connectivity, query, insert or delete failure
    #[error("Store error: {0}")]
    Store(String),

    /// A stored document could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Store call exceeded its deadline
    #[error("Store operation timed out after {0:?}")]
    Timeout(Duration),
}

impl RosterError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
