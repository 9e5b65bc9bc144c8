//! HTTP-facing error type.
//!
//! Every failure is rendered as a JSON body of the form `{ "message": "..." }`.
//! Internal causes are logged but never written to the response body.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;
use validator::ValidationErrors;

use crate::application::services::ShortenError;
use crate::domain::repositories::StoreError;

/// Response body for every error.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Errors returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request is malformed or carries an invalid value (400).
    #[error("{message}")]
    Validation { message: String },

    /// The requested resource does not exist (404).
    #[error("{message}")]
    NotFound { message: String },

    /// Infrastructure or internal failure (500).
    ///
    /// `message` is shown to the client, `cause` is only logged.
    #[error("{message}: {cause}")]
    Internal { message: String, cause: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, cause: impl ToString) -> Self {
        Self::Internal {
            message: message.into(),
            cause: cause.to_string(),
        }
    }

    /// Returns the HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            AppError::Validation { message } | AppError::NotFound { message } => message,
            AppError::Internal { message, cause } => {
                error!(%cause, "{}", message);
                message
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<ShortenError> for AppError {
    fn from(e: ShortenError) -> Self {
        match e {
            ShortenError::InvalidInput(reason) => {
                AppError::bad_request(format!("Missing or invalid url: {reason}"))
            }
            ShortenError::RetriesExhausted { .. } => {
                AppError::internal("Could not allocate a short code", e)
            }
            ShortenError::Store(cause) => AppError::from(cause),
            ShortenError::Generator(cause) => AppError::internal("Internal server error", cause),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::internal("Internal server error", e)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(_: ValidationErrors) -> Self {
        AppError::bad_request("Missing or invalid url")
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::url_validator::InvalidUrl;
    use std::time::Duration;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::internal("x", "y").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_shorten_error_mapping() {
        let invalid: AppError = ShortenError::InvalidInput(InvalidUrl::Empty).into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let exhausted: AppError = ShortenError::RetriesExhausted { attempts: 5 }.into();
        assert_eq!(exhausted.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let store: AppError =
            ShortenError::Store(StoreError::Timeout(Duration::from_secs(1))).into();
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_cause_not_in_message() {
        let err: AppError = StoreError::Backend("password authentication failed".into()).into();

        match err {
            AppError::Internal { message, cause } => {
                assert_eq!(message, "Internal server error");
                assert!(cause.contains("password authentication failed"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
