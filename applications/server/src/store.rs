/// Store bootstrap
use crate::{config::StorageSettings, state::with_deadline};
use roster_core::{Result, RosterError, UserStore};
use roster_storage::MongoUserStore;
use std::time::Duration;

/// Build the MongoDB store and verify it answers a ping within `limit`
///
/// Client construction and the ping share the one deadline.
pub async fn connect(settings: &StorageSettings, limit: Duration) -> Result<MongoUserStore> {
    with_deadline(limit, async {
        let store =
            MongoUserStore::connect(&settings.mongo_uri, &settings.database, &settings.collection)
                .await?;
        store.ping().await?;
        Ok::<_, RosterError>(store)
    })
    .await
}
