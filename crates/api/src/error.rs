//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use health::{FailureReport, HealthError};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Report assembly failed; returned as a generic 503 failure body.
    Health(HealthError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Health(err) => {
                tracing::error!(error = %err, "health check failed");
                let body = FailureReport::new(err.to_string());
                (StatusCode::SERVICE_UNAVAILABLE, axum::Json(body)).into_response()
            }
        }
    }
}

impl From<HealthError> for ApiError {
    fn from(err: HealthError) -> Self {
        ApiError::Health(err)
    }
}
