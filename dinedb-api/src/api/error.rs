//! API error responses

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::warn;

/// Handler result: a JSON envelope or an error response
pub type ApiResult = Result<Json<Value>, ApiError>;

/// Errors a query handler can answer with
#[derive(Error, Debug)]
pub enum ApiError {
    /// Query succeeded with zero rows; 404 `{ "message": ... }`
    #[error("{0}")]
    NotFound(String),

    /// Query failed in the store; 500 `{ "error": ... }`
    #[error("{0}")]
    Database(String),

    /// Path or query string could not be extracted; 400 `{ "error": ... }`
    #[error("{0}")]
    BadRequest(String),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<dinedb_common::Error> for ApiError {
    fn from(err: dinedb_common::Error) -> Self {
        match err {
            // Pass the store's own message through unprefixed
            dinedb_common::Error::Database(e) => ApiError::Database(e.to_string()),
            other => ApiError::Database(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, json!({ "message": message })),
            ApiError::Database(message) => {
                warn!("Query failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
        };

        (status, Json(body)).into_response()
    }
}
