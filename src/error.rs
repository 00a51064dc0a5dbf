//! Error surface of the route layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::models::Detail;

#[derive(Debug, Error)]
pub enum ApiError {
    /// No item matches the requested id. Recovered at the route layer as a
    /// 404 response, never propagated as a fault.
    #[error("Item not found")]
    NotFound,
    /// The backing store failed. Surfaced as a generic server error; the
    /// underlying cause is logged, not echoed to the client.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Item not found"),
            ApiError::Database(err) => {
                error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(Detail::new(detail))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
