//! Conference handlers

use super::{created, ApiError, ApiResult, CreatedResponse};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use confdesk_types::{Conference, Id, NewConference};
use tracing::info;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewConference>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(conference) = body.map_err(ApiError::write)?;

    let id = state
        .db
        .create_conference(&conference)
        .await
        .map_err(ApiError::write)?;
    info!("Conference {} created: {}", id, conference.name);

    Ok(created(id))
}

pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Conference>>> {
    let conferences = state
        .db
        .list_conferences()
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(conferences))
}

/// 204 with no body on success; referencing articles are kept.
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<Id>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id.map_err(ApiError::internal)?;

    if !state
        .db
        .delete_conference(id)
        .await
        .map_err(ApiError::internal)?
    {
        return Err(ApiError::NotFound("Conference"));
    }

    info!("Conference {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}
