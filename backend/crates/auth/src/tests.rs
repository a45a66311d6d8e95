//! Unit tests for auth crate

#[cfg(test)]
mod doubles {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::domain::entity::credential::Credential;
    use crate::domain::repository::CredentialRepository;
    use crate::error::{AuthError, AuthResult};

    /// Credential table held in a map
    #[derive(Clone, Default)]
    pub struct MapCredentials {
        rows: HashMap<String, Credential>,
    }

    impl MapCredentials {
        pub fn with(mut self, username: &str, stored: &str) -> Self {
            self.rows
                .insert(username.to_string(), Credential::new(username, stored));
            self
        }
    }

    impl CredentialRepository for MapCredentials {
        async fn find_by_username(&self, username: &str) -> AuthResult<Option<Credential>> {
            Ok(self.rows.get(username).cloned())
        }
    }

    /// Credential backend that never answers
    #[derive(Clone, Default)]
    pub struct DownCredentials {
        pub calls: Arc<AtomicUsize>,
    }

    impl CredentialRepository for DownCredentials {
        async fn find_by_username(&self, _username: &str) -> AuthResult<Option<Credential>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(AuthError::Timeout(Duration::from_secs(10)))
        }
    }
}

#[cfg(test)]
mod verifier_tests {
    use std::sync::atomic::Ordering;

    use platform::password::ClearTextPassword;

    use super::doubles::{DownCredentials, MapCredentials};
    use crate::application::CredentialVerifier;
    use crate::application::credential_verifier::CredentialMatch;
    use crate::infra::memory::StaticCredentialRepository;

    fn pw(raw: &str) -> ClearTextPassword {
        ClearTextPassword::new(raw.to_string())
    }

    fn builtin() -> StaticCredentialRepository {
        StaticCredentialRepository::single("admin", "password")
    }

    #[tokio::test]
    async fn test_persistent_plaintext_match() {
        let repo = MapCredentials::default().with("operator", "s3cret");
        let verifier = CredentialVerifier::from_capability(Some(repo), builtin());

        assert!(verifier.verify("operator", &pw("s3cret")).await);
        assert!(!verifier.verify("operator", &pw("wrong")).await);
    }

    #[tokio::test]
    async fn test_argon2_stored_credential() {
        let stored = pw("correct horse").hash().unwrap();
        let repo = MapCredentials::default().with("operator", &stored);
        let verifier = CredentialVerifier::from_capability(Some(repo), builtin());

        assert!(verifier.verify("operator", &pw("correct horse")).await);
        assert!(!verifier.verify("operator", &pw("battery staple")).await);
    }

    #[tokio::test]
    async fn test_builtin_account_when_not_in_store() {
        let repo = MapCredentials::default().with("operator", "s3cret");
        let verifier = CredentialVerifier::from_capability(Some(repo), builtin());

        assert!(verifier.verify("admin", &pw("password")).await);
        assert!(!verifier.verify("admin", &pw("letmein")).await);
    }

    #[tokio::test]
    async fn test_builtin_account_when_backend_down() {
        let repo = DownCredentials::default();
        let calls = repo.calls.clone();
        let verifier = CredentialVerifier::from_capability(Some(repo), builtin());

        assert!(verifier.verify("admin", &pw("password")).await);
        assert!(!verifier.verify("operator", &pw("s3cret")).await);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_without_persistent_store() {
        let verifier = CredentialVerifier::<MapCredentials>::from_capability(None, builtin());

        assert_eq!(
            verifier.check("admin", &pw("password")).await,
            CredentialMatch::BuiltIn
        );
        assert!(!verifier.verify("", &pw("")).await);
    }

    #[tokio::test]
    async fn test_builtin_account_shadows_changed_stored_password() {
        let repo = MapCredentials::default().with("admin", "rotated-secret");
        let verifier = CredentialVerifier::from_capability(Some(repo), builtin());

        assert_eq!(
            verifier.check("admin", &pw("rotated-secret")).await,
            CredentialMatch::Stored
        );
        assert_eq!(
            verifier.check("admin", &pw("password")).await,
            CredentialMatch::BuiltInOverStored
        );
        assert_eq!(
            verifier.check("admin", &pw("guess")).await,
            CredentialMatch::Rejected
        );
    }

    #[tokio::test]
    async fn test_builtin_match_source() {
        let repo = MapCredentials::default().with("operator", "s3cret");
        let verifier = CredentialVerifier::from_capability(Some(repo), builtin());

        assert_eq!(
            verifier.check("admin", &pw("password")).await,
            CredentialMatch::BuiltIn
        );
        assert_eq!(
            verifier.check("operator", &pw("s3cret")).await,
            CredentialMatch::Stored
        );
    }
}

#[cfg(test)]
mod registry_tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};

    use crate::application::SessionRegistry;
    use crate::application::config::AuthConfig;
    use crate::domain::entity::session::Session;
    use crate::domain::repository::SessionRepository;
    use crate::infra::memory::InMemorySessionRepository;

    #[tokio::test]
    async fn test_create_resolve_destroy() {
        let registry = SessionRegistry::new(Arc::new(InMemorySessionRepository::default()), None);

        let token = registry.create("admin").await.unwrap();
        assert_eq!(token.len(), 43);
        assert_eq!(
            registry.resolve(&token).await.unwrap().as_deref(),
            Some("admin")
        );

        assert!(registry.destroy(&token).await.unwrap());
        assert_eq!(registry.resolve(&token).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_tokens_are_unique() {
        let registry = SessionRegistry::new(Arc::new(InMemorySessionRepository::default()), None);

        let a = registry.create("admin").await.unwrap();
        let b = registry.create("admin").await.unwrap();

        assert_ne!(a, b);
        assert!(registry.resolve(&a).await.unwrap().is_some());
        assert!(registry.resolve(&b).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let registry = SessionRegistry::new(Arc::new(InMemorySessionRepository::default()), None);
        assert_eq!(registry.resolve("not-a-session").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_session_is_removed() {
        let repo = InMemorySessionRepository::default();
        let mut session = Session::new("admin");
        session.created_at = Utc::now() - Duration::hours(2);
        repo.create(&session).await.unwrap();

        let repo = Arc::new(repo);
        let registry = SessionRegistry::new(repo.clone(), Some(Duration::hours(1)));

        assert_eq!(registry.resolve(&session.token).await.unwrap(), None);
        assert!(repo.find_by_token(&session.token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_huge_ttl_does_not_overflow() {
        let ttl = AuthConfig::default()
            .with_session_ttl(std::time::Duration::from_secs(10_000_000_000_000))
            .session_ttl_chrono();
        let registry = SessionRegistry::new(Arc::new(InMemorySessionRepository::default()), ttl);

        let token = registry.create("admin").await.unwrap();
        assert_eq!(
            registry.resolve(&token).await.unwrap().as_deref(),
            Some("admin")
        );
    }

    #[tokio::test]
    async fn test_no_ttl_never_expires() {
        let repo = InMemorySessionRepository::default();
        let mut session = Session::new("admin");
        session.created_at = Utc::now() - Duration::days(365);
        repo.create(&session).await.unwrap();

        let registry = SessionRegistry::new(Arc::new(repo), None);
        assert!(registry.resolve(&session.token).await.unwrap().is_some());
    }
}

#[cfg(test)]
mod router_tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use axum::routing::{get, post};
    use axum::{Extension, Json, Router, middleware};
    use tower::ServiceExt;

    use super::doubles::{DownCredentials, MapCredentials};
    use crate::application::config::AuthConfig;
    use crate::application::CredentialVerifier;
    use crate::domain::repository::CredentialRepository;
    use crate::infra::memory::InMemorySessionRepository;
    use crate::presentation::handlers::AuthAppState;
    use crate::presentation::middleware::{CurrentSession, require_session};
    use crate::presentation::router::auth_router;

    fn app_with<C>(credentials: C) -> Router
    where
        C: CredentialRepository + Send + Sync + 'static,
    {
        let config = AuthConfig::default();
        let verifier =
            CredentialVerifier::from_capability(Some(credentials), config.fallback_credentials());
        let state = AuthAppState::new(verifier, InMemorySessionRepository::default(), config);

        let protected = Router::new()
            .route(
                "/main",
                get(|Extension(current): Extension<CurrentSession>| async move {
                    current.username
                }),
            )
            .route(
                "/echo",
                post(|Json(body): Json<serde_json::Value>| async move { Json(body) }),
            )
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_session::<C, InMemorySessionRepository>,
            ));

        auth_router(state).merge(protected)
    }

    fn app() -> Router {
        app_with(MapCredentials::default().with("operator", "s3cret"))
    }

    fn login_request(username: &str, password: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("username={username}&password={password}")))
            .unwrap()
    }

    fn with_cookie(method: &str, uri: &str, token: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::COOKIE, format!("session_id={token}"))
            .body(Body::empty())
            .unwrap()
    }

    fn session_token(response: &Response) -> String {
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        cookie
            .split(';')
            .next()
            .unwrap()
            .strip_prefix("session_id=")
            .unwrap()
            .to_string()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn login(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(login_request("admin", "password"))
            .await
            .unwrap();
        session_token(&response)
    }

    #[tokio::test]
    async fn test_login_page_renders_form() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains(r#"action="/login""#));
        assert!(!body.contains("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_login_success_sets_cookie_and_redirects() {
        let response = app()
            .oneshot(login_request("admin", "password"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/main");

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cookie.starts_with("session_id="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(!cookie.contains("Secure"));
        assert_eq!(session_token(&response).len(), 43);
    }

    #[tokio::test]
    async fn test_persistent_account_logs_in() {
        let response = app()
            .oneshot(login_request("operator", "s3cret"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn test_invalid_login_rerenders_form() {
        let response = app()
            .oneshot(login_request("admin", "nope"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert!(body_text(response).await.contains("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_login_with_backend_down_uses_builtin_account() {
        let app = app_with(DownCredentials::default());

        let response = app
            .clone()
            .oneshot(login_request("admin", "password"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let response = app
            .oneshot(login_request("operator", "s3cret"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_protected_route_requires_session() {
        let response = app()
            .oneshot(Request::builder().uri("/main").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers().get("X-Auth-Required").unwrap(), "true");
    }

    #[tokio::test]
    async fn test_gate_runs_before_body_parsing() {
        let request = Request::builder()
            .method("POST")
            .uri("/echo")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_token_is_rejected() {
        let response = app()
            .oneshot(with_cookie("GET", "/main", "forged-token"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_session_reaches_handler() {
        let app = app();
        let token = login(&app).await;

        let response = app
            .oneshot(with_cookie("GET", "/main", &token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "admin");
    }

    #[tokio::test]
    async fn test_login_page_redirects_when_signed_in() {
        let app = app();
        let token = login(&app).await;

        let response = app.oneshot(with_cookie("GET", "/", &token)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/main");
    }

    #[tokio::test]
    async fn test_logout_invalidates_token() {
        let app = app();
        let token = login(&app).await;

        let response = app
            .clone()
            .oneshot(with_cookie("POST", "/logout", &token))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
        let cleared = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cleared.starts_with("session_id=;"));
        assert!(cleared.contains("Max-Age=0"));

        let response = app
            .oneshot(with_cookie("GET", "/main", &token))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_logout_without_session() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
