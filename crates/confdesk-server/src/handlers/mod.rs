//! HTTP handlers

pub mod articles;
pub mod conferences;
pub mod error;
pub mod health;
pub mod users;

pub use error::{ApiError, ApiResult, MessageBody};
pub use health::health;

use axum::{http::StatusCode, Json};
use confdesk_types::Id;
use serde::Serialize;

/// Body of every successful insert
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    message: &'static str,
    id: Id,
}

pub(crate) fn created(id: Id) -> (StatusCode, Json<CreatedResponse>) {
    (
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "created",
            id,
        }),
    )
}

/// Unmatched routes
pub async fn not_found() -> (StatusCode, Json<MessageBody>) {
    (StatusCode::NOT_FOUND, Json(MessageBody::new("Not Found")))
}

#[cfg(test)]
mod tests;
