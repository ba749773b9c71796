//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use roster_core::{NewUser, Result, RosterError, UserId, UserRecord, UserStore};
use roster_server::{create_router, state::AppState};
use roster_storage::MemoryUserStore;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;
use tower::util::ServiceExt;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the real router over `store`
pub fn create_test_app(store: Arc<dyn UserStore>) -> Router {
    create_router(AppState::new(store, REQUEST_TIMEOUT))
}

/// Send one request through the router and decode the JSON response body
pub async fn send(app: &Router, request: Request<Body>) -> (Response<Body>, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (Response::from_parts(parts, Body::empty()), json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("DELETE")
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    post_raw(uri, &body.to_string())
}

pub fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Wraps a `MemoryUserStore` and counts every store call
#[derive(Default)]
pub struct CountingStore {
    pub inner: MemoryUserStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for CountingStore {
    async fn ping(&self) -> Result<()> {
        self.record();
        self.inner.ping().await
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        self.record();
        self.inner.list_users().await
    }

    async fn insert_user(&self, user: NewUser) -> Result<UserId> {
        self.record();
        self.inner.insert_user(user).await
    }

    async fn delete_user(&self, id: UserId) -> Result<u64> {
        self.record();
        self.inner.delete_user(id).await
    }
}

/// Store whose every call fails with a message that must not reach clients
pub struct FailingStore;

pub const SECRET_CAUSE: &str = "auth failed for mongodb://admin:hunter2@db:27017";

#[async_trait]
impl UserStore for FailingStore {
    async fn ping(&self) -> Result<()> {
        Err(RosterError::store(SECRET_CAUSE))
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        Err(RosterError::decode(SECRET_CAUSE))
    }

    async fn insert_user(&self, _user: NewUser) -> Result<UserId> {
        Err(RosterError::store(SECRET_CAUSE))
    }

    async fn delete_user(&self, _id: UserId) -> Result<u64> {
        Err(RosterError::store(SECRET_CAUSE))
    }
}

/// Store that never answers
pub struct StalledStore;

#[async_trait]
impl UserStore for StalledStore {
    async fn ping(&self) -> Result<()> {
        std::future::pending().await
    }

    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        std::future::pending().await
    }

    async fn insert_user(&self, _user: NewUser) -> Result<UserId> {
        std::future::pending().await
    }

    async fn delete_user(&self, _id: UserId) -> Result<u64> {
        std::future::pending().await
    }
}

/// Test user payloads
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn valid_user(name: &str) -> Value {
        json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "age": 30
        })
    }
}
