//! Roster Core
//!
//! Store-agnostic domain types, validation, and the storage trait for the
//! user record service.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `UserRecord`, `UserId`
//! - **Validation**: `CreateUser::validate` turns a request body into a `NewUser`
//! - **Core Traits**: `UserStore`, implemented by `roster-storage`
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{CreateUser, UserId};
//!
//! let request = CreateUser {
//!     name: Some("Ada".to_string()),
//!     email: Some("ada@example.com".to_string()),
//!     age: Some(36),
//! };
//! let new_user = request.validate(chrono::Utc::now()).unwrap();
//! assert_eq!(new_user.email, "ada@example.com");
//!
//! assert!(UserId::parse("not-a-valid-object-id").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use storage::UserStore;
pub use types::{is_valid_email, CreateUser, NewUser, User, UserId, UserRecord};
