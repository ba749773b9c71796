/// Users API routes
use crate::{
    api::health::MessageResponse,
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use chrono::Utc;
use roster_core::{CreateUser, RosterError, UserId, UserRecord};
use serde::Serialize;

pub const LIST_FAILED: &str = "Error al obtener usuarios";
pub const INSERT_FAILED: &str = "Error al insertar usuario";
pub const DELETE_FAILED: &str = "Error al eliminar usuario";
pub const INVALID_ID: &str = "ID inválido";
pub const NOT_FOUND: &str = "Usuario no encontrado";
pub const CREATED: &str = "Usuario creado";
pub const DELETED: &str = "Usuario eliminado";

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub message: &'static str,
    pub id: UserId,
}

/// GET /users
/// List every stored record
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<UserRecord>>> {
    let users = app_state
        .with_deadline(app_state.store.list_users())
        .await
        .map_err(ServerError::store(LIST_FAILED))?;

    Ok(Json(users))
}

/// POST /users
/// Validate the body, stamp createdAt and insert
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<CreateUser>, JsonRejection>,
) -> Result<Json<CreateUserResponse>> {
    let Json(request) = payload.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;

    let new_user = request.validate(Utc::now()).map_err(|err| match err {
        RosterError::Validation(msg) => ServerError::BadRequest(msg),
        other => ServerError::BadRequest(other.to_string()),
    })?;

    let id = app_state
        .with_deadline(app_state.store.insert_user(new_user))
        .await
        .map_err(ServerError::store(INSERT_FAILED))?;

    tracing::info!("Created user {}", id);
    Ok(Json(CreateUserResponse {
        message: CREATED,
        id,
    }))
}

/// DELETE /users/:id
/// Delete one record by id
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<MessageResponse>> {
    let user_id =
        UserId::parse(&id).map_err(|_| ServerError::BadRequest(INVALID_ID.to_string()))?;

    let deleted = app_state
        .with_deadline(app_state.store.delete_user(user_id))
        .await
        .map_err(ServerError::store(DELETE_FAILED))?;

    if deleted == 0 {
        return Err(ServerError::NotFound(NOT_FOUND.to_string()));
    }

    tracing::info!("Deleted user {}", user_id);
    Ok(Json(MessageResponse { message: DELETED }))
}
