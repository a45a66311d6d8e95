//! Askama templates for the admin view.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};
use kernel::error::app_error::AppError;

use crate::domain::entity::ApiStatus;

/// Main admin page
#[derive(Template)]
#[template(path = "main.html")]
pub struct MainTemplate {
    pub status: ApiStatus,
    pub message: String,
}

/// Render a template, turning a render failure into a 500
pub fn render_html<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Template render failed");
            AppError::internal("Failed to render page").into_response()
        }
    }
}
