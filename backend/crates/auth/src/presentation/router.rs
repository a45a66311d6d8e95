//! Auth Router

use axum::{
    Router,
    middleware,
    routing::{get, post},
};

use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_session;

/// Login page, login form target, and the gated logout route
pub fn auth_router<C, S>(state: AuthAppState<C, S>) -> Router
where
    C: CredentialRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/logout", post(handlers::logout::<C, S>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session::<C, S>,
        ))
        .route("/", get(handlers::login_page::<C, S>))
        .route("/login", post(handlers::login_submit::<C, S>))
        .with_state(state)
}
