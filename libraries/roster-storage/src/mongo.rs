//! MongoDB user store

use crate::convert::{document_to_record, new_user_document};
use crate::error::{Result, StorageError};
use async_trait::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::{options::ClientOptions, Client, Collection};
use roster_core::{NewUser, UserId, UserRecord, UserStore};

const APP_NAME: &str = "roster-server";

/// User store backed by one MongoDB collection
///
/// `Client` pools connections internally and is cheap to clone, so a single
/// store is shared by every request.
#[derive(Debug, Clone)]
pub struct MongoUserStore {
    client: Client,
    collection: Collection<Document>,
}

impl MongoUserStore {
    /// Build a client for `uri` and bind it to `database.collection`
    ///
    /// The driver connects lazily; call `ping` to verify the server is
    /// actually reachable.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string cannot be parsed or the
    /// client cannot be constructed
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options)?;
        tracing::debug!("MongoDB client created for {}.{}", database, collection);

        Ok(Self::from_client(client, database, collection))
    }

    /// Wrap an existing client (shared with other components or tests)
    pub fn from_client(client: Client, database: &str, collection: &str) -> Self {
        let collection = client.database(database).collection(collection);
        Self { client, collection }
    }

    /// Underlying collection handle
    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn ping(&self) -> roster_core::Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(StorageError::from)?;
        Ok(())
    }

    async fn list_users(&self) -> roster_core::Result<Vec<UserRecord>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(StorageError::from)?;
        let documents: Vec<Document> = cursor.try_collect().await.map_err(StorageError::from)?;

        tracing::debug!("Fetched {} user documents", documents.len());
        Ok(documents.into_iter().map(document_to_record).collect())
    }

    async fn insert_user(&self, user: NewUser) -> roster_core::Result<UserId> {
        let result = self
            .collection
            .insert_one(new_user_document(&user, None))
            .await
            .map_err(StorageError::from)?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StorageError::UnexpectedId(result.inserted_id.to_string()))?;
        tracing::debug!("Inserted user {}", id);
        Ok(id.into())
    }

    async fn delete_user(&self, id: UserId) -> roster_core::Result<u64> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.object_id() })
            .await
            .map_err(StorageError::from)?;

        tracing::debug!("Deleted {} user(s) with id {}", result.deleted_count, id);
        Ok(result.deleted_count)
    }
}
