//! Error responses shared by all handlers
//!
//! Store failures never reach the client in detail: writes answer with a
//! fixed `server error` body, everything else with the generic fallback.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Insert rejected, either by the body extractor or by a store constraint
    #[error("write failed: {0:#}")]
    Write(anyhow::Error),

    #[error("{0} not found")]
    NotFound(&'static str),

    /// Anything else, handled by the generic fallback
    #[error("internal error: {0:#}")]
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn write(err: impl Into<anyhow::Error>) -> Self {
        ApiError::Write(err.into())
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        ApiError::Internal(err.into())
    }
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Write(_) => {
                warn!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "server error".to_string())
            }
            ApiError::NotFound(what) => {
                (StatusCode::NOT_FOUND, format!("{} not found", what))
            }
            ApiError::Internal(_) => {
                error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(MessageBody::new(message))).into_response()
    }
}
