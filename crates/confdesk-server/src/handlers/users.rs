//! User handlers

use super::{created, ApiError, ApiResult, CreatedResponse};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use confdesk_types::{Id, NewUser, User};
use tracing::info;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(user) = body.map_err(ApiError::write)?;

    let id = state.db.create_user(&user).await.map_err(ApiError::write)?;
    info!("User {} created as {}", id, user.user_type);

    Ok(created(id))
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.db.list_users().await.map_err(ApiError::internal)?;
    Ok(Json(users))
}

pub async fn get_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<Option<User>>> {
    let user = state
        .db
        .get_user_by_email(&email)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(user))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    id: Result<Path<Id>, PathRejection>,
) -> ApiResult<Json<Option<User>>> {
    let Path(id) = id.map_err(ApiError::internal)?;

    let user = state.db.get_user(id).await.map_err(ApiError::internal)?;
    Ok(Json(user))
}
