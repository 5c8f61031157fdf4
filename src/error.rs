//! # Error Handling
//!
//! Error types for the application and their conversion into HTTP responses.
//!
//! - `CatalogError`: problems with the static surah catalog (startup only)
//! - `AppError`: failures inside request handlers, rendered as JSON

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised while loading or validating the surah catalog.
///
/// These only occur at startup. The server refuses to start rather than
/// serve a partially valid catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog is not valid JSON, or not a JSON object
    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no entries")]
    Empty,

    #[error("Catalog contains an entry with an empty name")]
    EmptyName,

    /// The value for `name` is not a positive integer that fits in a `u32`
    #[error("Invalid surah number for '{name}'")]
    InvalidNumber { name: String },

    /// Two names share one number (only raised by strict index builds)
    #[error("Surah number {number} is assigned to both '{first}' and '{second}'")]
    DuplicateNumber {
        number: u32,
        first: String,
        second: String,
    },
}

/// Application-wide error type for request handlers
///
/// Handlers return `AppResult<T>` and axum turns the error side into a
/// response through the `IntoResponse` impl below.
///
/// The `#[error(...)]` messages double as the client-facing text for the
/// 4xx variants, so they must not carry internal details.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404)
    ///
    /// Used when no surah has the requested number
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client sent something we can't use (400)
    ///
    /// Used when a path segment isn't an integer at all
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Unexpected failure (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Convert AppError into an HTTP response
///
/// Internal details are logged and replaced with a generic message; the
/// client-facing variants carry messages that are safe to show.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status code, user-facing message)
        let (status, error_message) = match &self {
            AppError::Internal(e) => {
                // Log the detail for debugging, hide it from the client
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            // For these errors, the message is safe to show to users
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        // Format: { "error": "error message here" }
        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;
