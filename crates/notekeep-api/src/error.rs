//! HTTP error mapping.
//!
//! Every failure leaves the API as `{"error": "<message>"}`. Store failures
//! are logged with their cause and replaced by an operation-specific message.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use notekeep_core::ValidationFailure;

/// Message returned whenever a note id has no stored note.
pub const NOTE_NOT_FOUND: &str = "Note not found";

/// Uniform error body.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// Generic message only; the cause has already been logged.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn note_not_found() -> Self {
        ApiError::NotFound(NOTE_NOT_FOUND.to_string())
    }

    /// Log a store failure and downgrade it to a generic 500.
    pub fn store(message: &'static str, op: &'static str, err: notekeep_core::Error) -> Self {
        error!(
            subsystem = "api",
            component = "notes",
            op,
            error = %err,
            "{}",
            message
        );
        ApiError::Internal(message.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationFailure> for ApiError {
    fn from(failure: ValidationFailure) -> Self {
        warn!(
            subsystem = "api",
            component = "validation",
            validation_kind = %failure.kind(),
            "Rejected note input"
        );
        ApiError::BadRequest(failure.message().to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(
            subsystem = "api",
            component = "validation",
            error = %rejection.body_text(),
            "Rejected request body"
        );
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Internal(msg) => msg,
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
