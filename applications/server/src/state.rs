/// Shared application state
use roster_core::{Result, RosterError, UserStore};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, request_timeout: Duration) -> Self {
        Self {
            store,
            request_timeout,
        }
    }

    /// Run a store call under the per-request deadline
    pub async fn with_deadline<T>(&self, operation: impl Future<Output = Result<T>>) -> Result<T> {
        with_deadline(self.request_timeout, operation).await
    }
}

/// Abort `operation` once `limit` has elapsed
///
/// Expiry is reported as `RosterError::Timeout`, which handlers surface like
/// any other store failure.
pub async fn with_deadline<T>(
    limit: Duration,
    operation: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::time::timeout(limit, operation)
        .await
        .unwrap_or(Err(RosterError::Timeout(limit)))
}
