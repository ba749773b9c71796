//! Conversions between stored BSON documents and the domain/JSON types

use bson::{oid::ObjectId, Bson, Document};
use chrono::{DateTime, SecondsFormat, Utc};
use roster_core::{NewUser, User, UserRecord};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Exact shape of a document written by `new_user_document`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    email: String,
    age: i64,
    #[serde(rename = "createdAt")]
    created_at: bson::DateTime,
}

impl UserDocument {
    fn into_user(self) -> Option<User> {
        Some(User {
            id: self.id.into(),
            name: self.name,
            email: self.email,
            age: self.age,
            created_at: to_chrono(self.created_at)?,
        })
    }
}

/// Build the document inserted for a new user
///
/// When `id` is `None` the field is left out and the driver generates it.
pub fn new_user_document(user: &NewUser, id: Option<ObjectId>) -> Document {
    let mut document = Document::new();
    if let Some(id) = id {
        document.insert("_id", id);
    }
    document.insert("name", user.name.as_str());
    document.insert("email", user.email.as_str());
    document.insert("age", user.age);
    document.insert(
        "createdAt",
        bson::DateTime::from_millis(user.created_at.timestamp_millis()),
    );
    document
}

/// Decode a stored document for the list response
///
/// Falls back to `UserRecord::Unknown` for anything that is not exactly the
/// current schema, keeping every field.
pub fn document_to_record(document: Document) -> UserRecord {
    match bson::from_document::<UserDocument>(document.clone()) {
        Ok(typed) => match typed.into_user() {
            Some(user) => UserRecord::User(user),
            None => UserRecord::Unknown(document_to_json(document)),
        },
        Err(err) => {
            tracing::debug!("Passing through document of unknown shape: {}", err);
            UserRecord::Unknown(document_to_json(document))
        }
    }
}

/// Convert a document to a JSON object
pub fn document_to_json(document: Document) -> Map<String, Value> {
    document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}

/// Convert a BSON value to JSON
///
/// ObjectIds become their hex string and datetimes an RFC 3339 string, the
/// same encodings `User` serializes with. Other values use relaxed
/// Extended JSON.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match to_chrono(dt) {
            Some(ts) => Value::String(ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(document) => Value::Object(document_to_json(document)),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

fn to_chrono(dt: bson::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(dt.timestamp_millis())
}
