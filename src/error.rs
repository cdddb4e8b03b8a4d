//! Defines the app level error type and its conversions to HTTP responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::expense::PayloadError;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An unhandled/unexpected SQL error.
    ///
    /// The message of the underlying error is passed through unchanged so that
    /// clients can see what went wrong in the store.
    #[error("{0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock.
    ///
    /// This happens when another request panicked while holding the lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// The body of a request could not be decoded into the expected type.
    #[error("invalid request body: {0}")]
    InvalidPayload(#[from] PayloadError),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl Error {
    /// Whether the error came from the database rather than the client.
    pub fn is_store_error(&self) -> bool {
        matches!(self, Error::SqlError(_) | Error::DatabaseLockError)
    }

    /// Convert the error into a 500 response with a JSON body of the form
    /// `{"status": "error", "message": "..."}`.
    pub fn into_json_response(self) -> Response {
        log_error(&self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "status": "error",
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}

/// Errors are rendered as a 500 response with the error message as plain text.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        log_error(&self);

        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

// Store errors are already logged where they are created.
fn log_error(error: &Error) {
    if !error.is_store_error() {
        tracing::warn!("Rejected request: {error}");
    }
}
