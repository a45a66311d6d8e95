//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use std::time::Duration;

use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username/password pair not accepted by any credential backend
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Session cookie missing, unknown, or expired
    #[error("Unauthorized")]
    SessionInvalid,

    /// Driver error, classified by the kernel conversion
    #[error("Database error: {0}")]
    Database(AppError),

    /// Backend operation exceeded its bound
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Database(e) => e.kind(),
            AuthError::Timeout(_) => ErrorKind::RequestTimeout,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::SessionInvalid => {
                AppError::unauthorized("Unauthorized").with_action("Sign in at /")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Timeout(after) => {
                tracing::error!(?after, "Auth backend timed out");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::SessionInvalid => {
                tracing::debug!("Request without a valid session");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let mut response = self.to_app_error().into_response();
        if matches!(self, AuthError::SessionInvalid) {
            response
                .headers_mut()
                .insert("X-Auth-Required", HeaderValue::from_static("true"));
        }
        response
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AuthError::Database(AppError::from(err))
    }
}

impl From<askama::Error> for AuthError {
    fn from(err: askama::Error) -> Self {
        AuthError::Internal(format!("Template render failed: {err}"))
    }
}
