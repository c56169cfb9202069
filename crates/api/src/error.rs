use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::completion::CompletionError;

/// Fixed client-facing text for the quota-exhausted condition.
pub const QUOTA_EXHAUSTED_MESSAGE: &str =
    "Insufficient OpenAI quota. Please refill your API quota.";

/// Fixed client-facing text for any other generation failure.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate message. Please try again later.";

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error
/// responses. The underlying cause of a completion service failure is
/// logged for operator diagnosis, never sent to the caller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A request failed validation; the message names the first bad field.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A failure from the completion service.
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Completion(CompletionError::QuotaExhausted) => (
                StatusCode::PAYMENT_REQUIRED,
                "QUOTA_EXHAUSTED",
                QUOTA_EXHAUSTED_MESSAGE.to_string(),
            ),
            AppError::Completion(CompletionError::Service(cause)) => {
                tracing::error!(error = %cause, "Completion service failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "GENERATION_FAILED",
                    GENERATION_FAILED_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
