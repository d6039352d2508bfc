//! API error mapping shared by all HTTP modules.
//!
//! Maps the domain error taxonomy onto HTTP statuses in one place:
//! validation -> 400, missing credential -> 401, members-only -> 403,
//! missing resource -> 404, upstream failure -> 500 with a generic body
//! and the detail logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// User-facing message.
    pub error: String,

    /// Stable machine-readable code.
    pub code: String,
}

impl ErrorResponse {
    /// Creates an error body with a code and message.
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("VALIDATION_FAILED", msg),
            ),
            ApiError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new("UNAUTHORIZED", msg),
            ),
            ApiError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new("MEMBERS_ONLY", msg),
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("NOT_FOUND", msg),
            ),
            ApiError::Internal(detail) => {
                // The detail stays in the logs; clients get a generic body.
                tracing::error!(detail = %detail, "upstream failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "Something went wrong"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        if error.code.is_not_found() {
            return ApiError::NotFound(error.message);
        }
        if error.code.is_upstream_failure() {
            return ApiError::Internal(error.to_string());
        }
        match error.code {
            ErrorCode::Unauthorized => ApiError::Unauthorized(error.message),
            ErrorCode::MembersOnly => ApiError::Forbidden(error.message),
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                ApiError::BadRequest(error.message)
            }
            _ => ApiError::Internal(error.to_string()),
        }
    }
}
