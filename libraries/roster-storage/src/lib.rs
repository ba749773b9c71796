//! Roster Storage
//!
//! MongoDB-backed implementation of `roster_core::UserStore`, plus an
//! in-process store with the same document semantics for tests and local runs.
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_core::UserStore;
//! use roster_storage::MongoUserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MongoUserStore::connect("mongodb://localhost:27017", "testdb", "users").await?;
//! store.ping().await?;
//!
//! for record in store.list_users().await? {
//!     println!("{}", serde_json::to_string(&record)?);
//! }
//! # Ok(())
//! # }
//! ```

mod error;

pub mod convert;
pub mod memory;
pub mod mongo;

pub use error::StorageError;
pub use memory::MemoryUserStore;
pub use mongo::MongoUserStore;
