//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from driver errors to [`AppError`] and
//! the HTTP response rendering.

#[cfg(any(feature = "sqlx", feature = "axum"))]
use super::app_error::AppError;
#[cfg(feature = "sqlx")]
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => {
                AppError::new(ErrorKind::NotFound, "Record not found").with_source(err)
            }
            sqlx::Error::PoolTimedOut => {
                AppError::new(ErrorKind::RequestTimeout, "Database connection pool timed out")
                    .with_source(err)
            }
            sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                AppError::service_unavailable("Database connection error").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    // Class 08 — Connection Exception
                    Some(code) if code.starts_with("08") => {
                        AppError::service_unavailable("Database connection lost")
                    }
                    // Class 57 — Operator Intervention (shutdown, query canceled)
                    Some("57014") => {
                        AppError::new(ErrorKind::RequestTimeout, "Database statement timed out")
                    }
                    Some(code) if code.starts_with("57") => {
                        AppError::service_unavailable("Database unavailable")
                    }
                    Some("23514") => AppError::bad_request("Check constraint violation"),
                    _ => AppError::internal("Database error"),
                };
                app_err.with_source(err)
            }
            sqlx::Error::Tls(_) => AppError::service_unavailable("Database TLS error").with_source(err),
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // RFC 7807 Problem Details for HTTP APIs
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "detail": self.message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}
