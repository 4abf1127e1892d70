//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::services::validation::ValidationError;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Validation Errors**: The submitted credit payload was rejected
/// - **Resource Errors**: The targeted credit record does not exist
/// - **Body Errors**: The request body could not be read at all
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (connection error, query error, ...).
    ///
    /// Returns HTTP 500; the details are logged but never sent to the client.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A field of the payload is missing or invalid.
    ///
    /// Returns HTTP 400 with the message of the first failing field.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No credit record has the requested id.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Crédito no encontrado")]
    CreditoNotFound,

    /// The request body could not be buffered (e.g. it exceeds the size limit).
    #[error(transparent)]
    Body(#[from] BytesRejection),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// { "error": "Human-readable error message" }
/// ```
///
/// # Status Code Mapping
///
/// - `Validation` → 400 Bad Request
/// - `CreditoNotFound` → 404 Not Found
/// - `Body` → status of the underlying rejection
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(ref err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::CreditoNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Body(ref rejection) => (rejection.status(), rejection.body_text()),
            AppError::Database(ref err) => {
                tracing::error!(error = %err, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
