//! In-process user store
//!
//! Keeps raw BSON documents in insertion order and decodes them through the
//! same path as `MongoUserStore`, so list output is identical for both.

use crate::convert::{document_to_record, new_user_document};
use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use roster_core::{NewUser, Result, UserId, UserRecord, UserStore};
use tokio::sync::RwLock;

/// User store backed by a `Vec<Document>`
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    documents: RwLock<Vec<Document>>,
}

impl MemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw document, bypassing validation (for seeding legacy data)
    pub async fn insert_document(&self, mut document: Document) -> ObjectId {
        let id = match document.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };
        self.documents.write().await.push(document);
        id
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Whether the store holds no documents
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let documents = self.documents.read().await;
        Ok(documents.iter().cloned().map(document_to_record).collect())
    }

    async fn insert_user(&self, user: NewUser) -> Result<UserId> {
        let id = ObjectId::new();
        self.documents
            .write()
            .await
            .push(new_user_document(&user, Some(id)));
        tracing::debug!("Inserted user {}", id);
        Ok(id.into())
    }

    async fn delete_user(&self, id: UserId) -> Result<u64> {
        let mut documents = self.documents.write().await;
        let position = documents
            .iter()
            .position(|doc| doc.get_object_id("_id").ok() == Some(id.object_id()));

        Ok(match position {
            Some(index) => {
                documents.remove(index);
                1
            }
            None => 0,
        })
    }
}
