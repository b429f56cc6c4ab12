//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_links::LinkError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {0}")]
    Validation(String, Vec<FieldViolation>),
}

/// One field rule violation in a validation failure
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None)
            }
            ApiError::Validation(msg, violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg,
                Some(violations),
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<LinkError> for ApiError {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::Validation(violations) => ApiError::Validation(
                "Creation request failed validation".to_string(),
                violations
                    .into_iter()
                    .map(|v| FieldViolation {
                        field: v.field().to_string(),
                        message: v.to_string(),
                    })
                    .collect(),
            ),
            LinkError::NotFound(id) => ApiError::NotFound(format!("Link not found: {id}")),
            LinkError::AlreadyFinalized(id) => {
                ApiError::Conflict(format!("Link already finalized: {id}"))
            }
            // A duplicate id means the generator is broken; surface as a
            // server fault, never retry
            LinkError::DuplicateId(id) => {
                ApiError::Internal(format!("Duplicate link id: {id}"))
            }
        }
    }
}
