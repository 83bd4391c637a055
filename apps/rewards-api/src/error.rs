//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Rewards API                            │
//! │                                                                         │
//! │  Handler: Result<Json<T>, ApiError>                                     │
//! │         │                                                               │
//! │         ├── bad JSON / missing field ─┐                                 │
//! │         ├── ValidationError ──────────┼──► 400 VALIDATION_ERROR          │
//! │         ├── CoreError ────────────────┘                                 │
//! │         │                                                               │
//! │         └── StoreError::NotFound ─────────► 404 NOT_FOUND               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Response Body
//! ```json
//! {
//!   "code": "NOT_FOUND",
//!   "error": "No receipt found for that ID."
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use rewards_core::{CoreError, ValidationError};
use rewards_store::StoreError;

pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid.";
pub const RECEIPT_NOT_FOUND_MESSAGE: &str = "No receipt found for that ID.";

/// API error returned from handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    #[serde(rename = "error")]
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
        }
    }
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Invalid receipt, with `detail` appended to the standard message.
    pub fn validation(detail: impl std::fmt::Display) -> Self {
        ApiError::new(
            ErrorCode::ValidationError,
            format!("{} {}", INVALID_RECEIPT_MESSAGE, detail),
        )
    }

    pub fn not_found() -> Self {
        ApiError::new(ErrorCode::NotFound, RECEIPT_NOT_FOUND_MESSAGE)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        tracing::warn!(field = err.field(), error = %err, "Rejected receipt");
        ApiError::validation(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => {
                tracing::info!(%id, "No receipt found");
                ApiError::not_found()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for handlers and services.
pub type ApiResult<T> = Result<T, ApiError>;
