//! Custom error types for the stories service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the stories service
///
/// The HTTP contract collapses every failure kind — validation, constraint
/// violation, infrastructure — into a 400 carrying the error text, so the
/// variants here only track where the failure originated.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Input rejected before reaching the data layer
    #[error("{0}")]
    Validation(String),

    /// Failure propagated from the stored-procedure adapter
    #[error("{0}")]
    Procedure(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let body = Json(json!({
            "error": message,
        }));

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
