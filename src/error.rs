//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework. Every handler
//! returns `AppResult<T>`; errors that reach the framework are rendered
//! as the shared HTML error page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::{constants::messages, views};

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    // Input errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// A uniqueness or similar constraint rejected the write
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A write touched zero rows, or more than one
    #[error("Operation failed: {0}")]
    OperationFailed(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONSTRAINT_VIOLATION",
            Self::OperationFailed(_) => "OPERATION_FAILED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidToken | Self::TokenExpired | Self::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::OperationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the user on the error page
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg)
            | Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::OperationFailed(msg)
            | Self::Forbidden(msg) => msg.clone(),
            Self::Database(_) | Self::Internal(_) => messages::OPERATION_FAILED.to_string(),
            _ => self.to_string(),
        }
    }

    /// Shorthand for the generic "invalid call" validation failure
    pub fn invalid_call() -> Self {
        Self::Validation(messages::INVALID_CALL.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
            }
            _ => {
                tracing::debug!(code = self.error_code(), error = %self, "Request failed");
            }
        }

        let body = views::html::error_page(status, &self.user_message());
        (status, Html(body)).into_response()
    }
}

// Implement From for common error types
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound(messages::INVALID_CALL.to_string()),
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    AppError::Conflict(messages::OPERATION_FAILED.to_string())
                } else if db_err.is_foreign_key_violation() {
                    // Referenced competition or user does not exist
                    AppError::NotFound(messages::INVALID_CALL.to_string())
                } else {
                    AppError::Database(db_err.to_string())
                }
            }
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        tracing::debug!(errors = %err, "Input rejected by schema");
        AppError::invalid_call()
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
