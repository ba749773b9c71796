/// ID types for Roster entities
use crate::error::{Result, RosterError};
use bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// User identifier
///
/// Wraps the store's 12-byte ObjectId. At the HTTP boundary it is always the
/// 24 character lowercase hex encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(ObjectId);

impl UserId {
    /// Generate a new user ID
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// Parse a hex-encoded identifier
    pub fn parse(hex: &str) -> Result<Self> {
        ObjectId::parse_str(hex)
            .map(Self)
            .map_err(|_| RosterError::InvalidId(hex.to_string()))
    }

    /// Get the underlying ObjectId
    pub fn object_id(&self) -> ObjectId {
        self.0
    }

    /// Hex encoding used on the wire
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<ObjectId> for UserId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for UserId {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

impl Serialize for UserId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::parse(&hex).map_err(serde::de::Error::custom)
    }
}
