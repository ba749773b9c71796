//! Storage trait for the user collection

use crate::error::Result;
use crate::types::{NewUser, UserId, UserRecord};
use async_trait::async_trait;

/// Access to the single user collection
///
/// Implementations must be safe to share across request tasks. Each method
/// is one store round trip; callers are responsible for bounding how long
/// they wait on it.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Check that the store is reachable
    async fn ping(&self) -> Result<()>;

    /// Fetch every record with an empty filter, in store iteration order
    async fn list_users(&self) -> Result<Vec<UserRecord>>;

    /// Insert a validated user and return the identifier the store assigned
    async fn insert_user(&self, user: NewUser) -> Result<UserId>;

    /// Delete by primary key, returning how many records were removed (0 or 1)
    async fn delete_user(&self, id: UserId) -> Result<u64>;
}
