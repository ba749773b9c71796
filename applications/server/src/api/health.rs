/// Health check API route
use axum::Json;
use serde::Serialize;

pub const HEALTH_MESSAGE: &str = "API funcionando";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET / - Health check endpoint
pub async fn health() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: HEALTH_MESSAGE,
    })
}
