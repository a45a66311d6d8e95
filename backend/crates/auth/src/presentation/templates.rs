//! Askama templates for the login page.

use askama::Template;
use axum::response::Html;

use crate::error::AuthResult;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

impl LoginTemplate {
    pub fn blank() -> Self {
        Self { error: None }
    }

    pub fn invalid_credentials() -> Self {
        Self {
            error: Some(INVALID_CREDENTIALS_MESSAGE.to_string()),
        }
    }

    pub fn to_html(&self) -> AuthResult<Html<String>> {
        Ok(Html(self.render()?))
    }
}
