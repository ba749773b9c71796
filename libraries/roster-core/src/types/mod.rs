/// Core domain types for Roster
pub mod ids;
pub mod user;

pub use ids::UserId;
pub use user::{is_valid_email, CreateUser, NewUser, User, UserRecord};
