//! Auth Middleware
//!
//! Session gate for protected routes. Runs before the handler's
//! extractors, so an unauthenticated request is rejected without its
//! body ever being read.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::application::CheckSessionUseCase;
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::error::AuthError;
use crate::presentation::handlers::AuthAppState;

/// Authenticated session, stored in request extensions
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub token: String,
    pub username: String,
}

/// Middleware that requires a valid session cookie
pub async fn require_session<C, S>(
    State(state): State<AuthAppState<C, S>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    C: CredentialRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let token = platform::cookie::extract_cookie(req.headers(), state.config.session_cookie_name())
        .ok_or(AuthError::SessionInvalid)?;

    let use_case = CheckSessionUseCase::new(state.sessions.clone());
    let info = use_case.execute(&token).await?;

    req.extensions_mut().insert(CurrentSession {
        token,
        username: info.username,
    });

    Ok(next.run(req).await)
}
