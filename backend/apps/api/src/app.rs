//! Router composition

use std::sync::Arc;

use auth::domain::repository::CredentialRepository;
use auth::{
    AuthAppState, AuthConfig, CredentialVerifier, InMemorySessionRepository,
    PgCredentialRepository, auth_router, require_session,
};
use axum::{Router, middleware};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use sqlx::PgPool;
use toggle::domain::repository::ApiStateRepository;
use toggle::{ApiStateStore, PgApiStateRepository, admin_router, public_router};
use tower_http::trace::TraceLayer;

/// Stores and auth state shared by every request
pub struct AppServices<C, R>
where
    C: CredentialRepository + Send + Sync + 'static,
    R: ApiStateRepository + Send + Sync + 'static,
{
    pub auth: AuthAppState<C, InMemorySessionRepository>,
    pub store: Arc<ApiStateStore<R>>,
}

impl AppServices<PgCredentialRepository, PgApiStateRepository> {
    /// Persistent backends when a pool is given, memory-only otherwise
    pub fn from_pool(pool: Option<PgPool>, auth_config: AuthConfig) -> Self {
        Self::new(
            pool.clone().map(PgCredentialRepository::new),
            pool.map(PgApiStateRepository::new),
            auth_config,
        )
    }
}

impl<C, R> AppServices<C, R>
where
    C: CredentialRepository + Send + Sync + 'static,
    R: ApiStateRepository + Send + Sync + 'static,
{
    pub fn new(credentials: Option<C>, state: Option<R>, auth_config: AuthConfig) -> Self {
        let verifier =
            CredentialVerifier::from_capability(credentials, auth_config.fallback_credentials());
        let sessions = InMemorySessionRepository::with_ttl(auth_config.session_ttl_chrono());

        Self {
            auth: AuthAppState::new(verifier, sessions, auth_config),
            store: Arc::new(ApiStateStore::from_capability(state)),
        }
    }

    /// Full application router.
    ///
    /// `/main`, `/toggle`, `/update-message` and `/logout` sit behind the
    /// session gate; `/`, `/login` and `/api/status` are open.
    pub fn router(&self) -> Router {
        let admin = admin_router(self.store.clone()).route_layer(middleware::from_fn_with_state(
            self.auth.clone(),
            require_session::<C, InMemorySessionRepository>,
        ));

        Router::new()
            .merge(auth_router(self.auth.clone()))
            .merge(public_router(self.store.clone()))
            .merge(admin)
            .fallback(not_found)
            .layer(TraceLayer::new_for_http())
    }
}

async fn not_found() -> AppError {
    AppError::new(ErrorKind::NotFound, "Not found")
}
