//! State Store Error Types
//!
//! These never reach the HTTP layer: the store catches them at the
//! fallback site. They exist so the catch site can log what failed.

use std::time::Duration;

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// State-store result type alias
pub type StateResult<T> = Result<T, StateError>;

#[derive(Debug, Error)]
pub enum StateError {
    /// Driver error, classified by the kernel conversion
    #[error("Database error: {0}")]
    Database(AppError),

    /// Operation exceeded its bound
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),

    /// Stored record could not be decoded
    #[error("Invalid state record: {0}")]
    InvalidRecord(String),
}

impl StateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StateError::Database(e) => e.kind(),
            StateError::Timeout(_) => ErrorKind::RequestTimeout,
            StateError::InvalidRecord(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log a persistent-backend failure that is about to be served from memory
    pub(crate) fn log_fallback(&self, operation: &'static str) {
        if self.kind().is_transient() {
            tracing::warn!(
                operation,
                error = %self,
                "State backend unavailable, using in-memory state"
            );
        } else {
            tracing::error!(
                operation,
                error = %self,
                "State backend failed, using in-memory state"
            );
        }
    }
}

impl From<sqlx::Error> for StateError {
    fn from(err: sqlx::Error) -> Self {
        StateError::Database(AppError::from(err))
    }
}
