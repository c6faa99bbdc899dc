//! HTTP error mapping for REST handlers.

use api_shared::ErrorRes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use derm_core::DermError;

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Analysis failed: {0}")]
    Internal(String),
}

impl From<DermError> for ApiError {
    fn from(e: DermError) -> Self {
        if e.is_client_error() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(detail) => {
                tracing::warn!(detail, "rejected analysis request");
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "analysis failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorRes {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
