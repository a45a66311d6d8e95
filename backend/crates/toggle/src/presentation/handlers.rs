//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::Response;

use crate::application::store::ApiStateStore;
use crate::domain::repository::ApiStateRepository;
use crate::presentation::dto::{
    StatusResponse, SuccessResponse, ToggleRequest, UpdateMessageRequest,
};
use crate::presentation::templates::{MainTemplate, render_html};

/// Shared state for toggle handlers
pub struct ToggleAppState<R>
where
    R: ApiStateRepository + Send + Sync + 'static,
{
    pub store: Arc<ApiStateStore<R>>,
}

// Manual impl: `R` itself does not need to be `Clone`.
impl<R> Clone for ToggleAppState<R>
where
    R: ApiStateRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

/// GET /main
pub async fn main_page<R>(State(state): State<ToggleAppState<R>>) -> Response
where
    R: ApiStateRepository + Send + Sync + 'static,
{
    let current = state.store.get_state().await;

    render_html(&MainTemplate {
        status: current.status,
        message: current.message,
    })
}

/// POST /toggle
pub async fn toggle_status<R>(
    State(state): State<ToggleAppState<R>>,
    Json(req): Json<ToggleRequest>,
) -> Json<SuccessResponse>
where
    R: ApiStateRepository + Send + Sync + 'static,
{
    state.store.set_status(req.status).await;
    Json(SuccessResponse::ok())
}

/// POST /update-message
pub async fn update_message<R>(
    State(state): State<ToggleAppState<R>>,
    Json(req): Json<UpdateMessageRequest>,
) -> Json<SuccessResponse>
where
    R: ApiStateRepository + Send + Sync + 'static,
{
    state.store.set_message(&req.message).await;
    Json(SuccessResponse::ok())
}

/// GET /api/status
pub async fn api_status<R>(State(state): State<ToggleAppState<R>>) -> Json<StatusResponse>
where
    R: ApiStateRepository + Send + Sync + 'static,
{
    Json(state.store.get_state().await.into())
}
