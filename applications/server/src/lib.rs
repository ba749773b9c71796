//! Roster Server Library
//!
//! HTTP service exposing list/create/delete over a single MongoDB collection
//! of user records.
//!
//! This library exposes the router and its building blocks for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
