//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.
//!
//! Error bodies follow the `{"detail": "..."}` shape the activities UI reads.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Catalog lookup or roster change rejected
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Catalog(e) => match e {
                CatalogError::ActivityNotFound { .. } => {
                    (StatusCode::NOT_FOUND, "ACTIVITY_NOT_FOUND")
                }
                CatalogError::ParticipantNotFound { .. } => {
                    (StatusCode::NOT_FOUND, "PARTICIPANT_NOT_FOUND")
                }
                CatalogError::AlreadySignedUp { .. } => (StatusCode::BAD_REQUEST, "ALREADY_SIGNED_UP"),
                CatalogError::ActivityFull { .. } => (StatusCode::BAD_REQUEST, "ACTIVITY_FULL"),
                CatalogError::MissingEmail => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
                CatalogError::SeedIo { .. } | CatalogError::SeedParse { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "CATALOG_ERROR")
                }
            },
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "API error occurred"
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request rejected"
            );
        }

        let body = ErrorResponse {
            detail: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
