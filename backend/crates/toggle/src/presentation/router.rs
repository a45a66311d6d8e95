//! Toggle Routers
//!
//! The admin router carries no authentication of its own; the caller
//! layers the session gate on top.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::store::ApiStateStore;
use crate::domain::repository::ApiStateRepository;
use crate::presentation::handlers::{self, ToggleAppState};

/// Unauthenticated routes: `GET /api/status`
pub fn public_router<R>(store: Arc<ApiStateStore<R>>) -> Router
where
    R: ApiStateRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/api/status", get(handlers::api_status::<R>))
        .with_state(ToggleAppState { store })
}

/// Admin routes: `GET /main`, `POST /toggle`, `POST /update-message`
pub fn admin_router<R>(store: Arc<ApiStateStore<R>>) -> Router
where
    R: ApiStateRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/main", get(handlers::main_page::<R>))
        .route("/toggle", post(handlers::toggle_status::<R>))
        .route("/update-message", post(handlers::update_message::<R>))
        .with_state(ToggleAppState { store })
}
