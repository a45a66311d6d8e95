//! HTTP Handlers

use std::sync::Arc;

use axum::Extension;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};

use platform::cookie::{extract_cookie, set_cookie_header};
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, CredentialVerifier, SessionRegistry, SignInInput, SignInUseCase,
    SignOutUseCase,
};
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::LoginForm;
use crate::presentation::middleware::CurrentSession;
use crate::presentation::templates::LoginTemplate;

/// Landing page after a successful login
pub const HOME_PATH: &str = "/main";
/// Login page
pub const LOGIN_PATH: &str = "/";

/// Shared state for auth handlers and the session gate
pub struct AuthAppState<C, S>
where
    C: CredentialRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    pub verifier: Arc<CredentialVerifier<C>>,
    pub sessions: Arc<SessionRegistry<S>>,
    pub config: Arc<AuthConfig>,
}

impl<C, S> AuthAppState<C, S>
where
    C: CredentialRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    pub fn new(verifier: CredentialVerifier<C>, sessions: S, config: AuthConfig) -> Self {
        let registry = SessionRegistry::new(Arc::new(sessions), config.session_ttl_chrono());
        Self {
            verifier: Arc::new(verifier),
            sessions: Arc::new(registry),
            config: Arc::new(config),
        }
    }
}

impl<C, S> Clone for AuthAppState<C, S>
where
    C: CredentialRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            verifier: self.verifier.clone(),
            sessions: self.sessions.clone(),
            config: self.config.clone(),
        }
    }
}

/// GET /
pub async fn login_page<C, S>(
    State(state): State<AuthAppState<C, S>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    C: CredentialRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    if let Some(token) = extract_cookie(&headers, state.config.session_cookie_name()) {
        let use_case = CheckSessionUseCase::new(state.sessions.clone());
        if use_case.is_valid(&token).await {
            return Ok(Redirect::to(HOME_PATH).into_response());
        }
    }

    Ok(LoginTemplate::blank().to_html()?.into_response())
}

/// POST /login
pub async fn login_submit<C, S>(
    State(state): State<AuthAppState<C, S>>,
    Form(form): Form<LoginForm>,
) -> AuthResult<Response>
where
    C: CredentialRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(state.verifier.clone(), state.sessions.clone());

    let input = SignInInput {
        username: form.username,
        password: ClearTextPassword::new(form.password),
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let cookie = state.config.cookie.build_set_cookie(&output.session_token);
            Ok((
                [(header::SET_COOKIE, set_cookie_header(&cookie))],
                Redirect::to(HOME_PATH),
            )
                .into_response())
        }
        Err(AuthError::InvalidCredentials) => {
            AuthError::InvalidCredentials.log();
            Ok(LoginTemplate::invalid_credentials()
                .to_html()?
                .into_response())
        }
        Err(e) => Err(e),
    }
}

/// POST /logout
pub async fn logout<C, S>(
    State(state): State<AuthAppState<C, S>>,
    Extension(current): Extension<CurrentSession>,
) -> AuthResult<Response>
where
    C: CredentialRepository + Send + Sync + 'static,
    S: SessionRepository + Send + Sync + 'static,
{
    let use_case = SignOutUseCase::new(state.sessions.clone());
    use_case.execute(&current.token, &current.username).await?;

    let cookie = state.config.cookie.build_delete_cookie();

    Ok((
        [(header::SET_COOKIE, set_cookie_header(&cookie))],
        Redirect::to(LOGIN_PATH),
    )
        .into_response())
}
