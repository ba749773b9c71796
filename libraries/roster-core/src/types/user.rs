/// User domain types
use crate::error::{Result, RosterError};
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier
    #[serde(rename = "_id")]
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact address
    pub email: String,

    /// Age in years
    pub age: i64,

    /// Server-assigned creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Validated user ready to be inserted; the store assigns the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Display name, never empty
    pub name: String,

    /// Address that passed `is_valid_email`
    pub email: String,

    /// Age in years
    pub age: i64,

    /// Creation timestamp stamped by the service
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /users`
///
/// Every field is optional at the serde level so that a missing field is
/// reported by `validate` with a message naming it. Unknown fields,
/// `createdAt` included, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub name: Option<String>,

    /// Contact address
    pub email: Option<String>,

    /// Age in years
    pub age: Option<i64>,
}

impl CreateUser {
    /// Check required fields and email syntax, stamping `created_at`
    pub fn validate(self, created_at: DateTime<Utc>) -> Result<NewUser> {
        let name = self
            .name
            .ok_or_else(|| RosterError::validation("name is required"))?;
        if name.trim().is_empty() {
            return Err(RosterError::validation("name must not be empty"));
        }

        let email = self
            .email
            .ok_or_else(|| RosterError::validation("email is required"))?;
        if !is_valid_email(&email) {
            return Err(RosterError::validation(format!(
                "email '{}' is not a valid address",
                email
            )));
        }

        // zero is treated as absent, like the other required fields
        let age = self
            .age
            .filter(|age| *age != 0)
            .ok_or_else(|| RosterError::validation("age is required"))?;

        Ok(NewUser {
            name,
            email,
            age,
            created_at,
        })
    }
}

/// One element of the list response
///
/// Documents that have exactly the `User` shape decode into `User`. Anything
/// else (legacy field names, extra fields, other types) is passed through
/// untouched as an object of unknown shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UserRecord {
    /// Document matching the current schema
    User(User),

    /// Document of unknown shape, already converted to JSON
    Unknown(serde_json::Map<String, serde_json::Value>),
}

impl UserRecord {
    /// Email of the record, when it has a string `email` field
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::User(user) => Some(&user.email),
            Self::Unknown(fields) => fields.get("email").and_then(serde_json::Value::as_str),
        }
    }
}

/// Basic `local@domain` syntax check
///
/// Requires exactly one `@`, a non-empty local part, no whitespace or control
/// characters, and a domain of at least two non-empty dot-separated labels.
/// A single trailing dot on the domain (`example.com.`) is allowed.
pub fn is_valid_email(email: &str) -> bool {
    if email
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let mut labels = domain.split('.');
    labels.clone().count() >= 2 && labels.all(|label| !label.is_empty())
}
