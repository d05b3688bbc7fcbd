//! Article handlers

use super::{created, ApiError, ApiResult, CreatedResponse};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use confdesk_types::{Article, Id, NewArticle};
use tracing::info;

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewArticle>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let Json(article) = body.map_err(ApiError::write)?;

    let id = state
        .db
        .create_article(&article)
        .await
        .map_err(ApiError::write)?;
    info!(
        "Article {} created for conference {}",
        id, article.conference_id
    );

    Ok(created(id))
}

/// Responds with JSON `null` when the id is unknown.
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<Id>, PathRejection>,
) -> ApiResult<Json<Option<Article>>> {
    let Path(id) = id.map_err(ApiError::internal)?;

    let article = state.db.get_article(id).await.map_err(ApiError::internal)?;
    Ok(Json(article))
}

pub async fn list_by_conference(
    State(state): State<AppState>,
    conference_id: Result<Path<Id>, PathRejection>,
) -> ApiResult<Json<Vec<Article>>> {
    let Path(conference_id) = conference_id.map_err(ApiError::internal)?;

    let articles = state
        .db
        .list_articles_by_conference(conference_id)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(articles))
}
