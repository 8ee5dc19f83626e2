//! # HTTP Boundary Errors
//!
//! Maps validation failures to client error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::validation::{ValidationError, Violation};

/// Errors returned by the validation endpoints
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Body is not UTF-8 JSON
    #[error("Malformed request body: {error}")]
    MalformedBody {
        request_id: String,
        error: ValidationError,
    },

    /// Body is JSON but violates the model
    #[error("{error}")]
    Validation {
        request_id: String,
        error: ValidationError,
    },
}

impl ApiError {
    /// Wraps a validation error, picking the variant from its violations
    pub fn from_validation(request_id: impl Into<String>, error: ValidationError) -> Self {
        let request_id = request_id.into();
        if error.is_malformed() {
            ApiError::MalformedBody { request_id, error }
        } else {
            ApiError::Validation { request_id, error }
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn request_id(&self) -> &str {
        match self {
            ApiError::MalformedBody { request_id, .. } | ApiError::Validation { request_id, .. } => {
                request_id.as_str()
            }
        }
    }

    pub fn validation_error(&self) -> &ValidationError {
        match self {
            ApiError::MalformedBody { error, .. } | ApiError::Validation { error, .. } => error,
        }
    }
}

/// Error response body
///
/// `code` is always `REGEN_VALIDATION_FAILED`; the per-violation codes say
/// whether the body was malformed or merely invalid.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: String,
    pub code: &'static str,
    pub model: &'static str,
    pub request_id: String,
    pub violations: Vec<Violation>,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let message = err.to_string();
        let (request_id, error) = match err {
            ApiError::MalformedBody { request_id, error } | ApiError::Validation { request_id, error } => {
                (request_id, error)
            }
        };
        Self {
            status: "error",
            error: message,
            code: ValidationError::CODE,
            model: error.model(),
            request_id,
            violations: error.into_violations(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
