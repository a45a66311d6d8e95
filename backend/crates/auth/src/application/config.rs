//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;

use crate::infra::memory::StaticCredentialRepository;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Built-in account used when the credential backend can't vouch for a login
pub const DEFAULT_FALLBACK_USERNAME: &str = "admin";
pub const DEFAULT_FALLBACK_PASSWORD: &str = "password";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie attributes (name `session_id`)
    pub cookie: CookieConfig,
    /// Absolute session lifetime; `None` keeps sessions until logout or restart
    pub session_ttl: Option<Duration>,
    pub fallback_username: String,
    pub fallback_password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie: CookieConfig::default(),
            session_ttl: None,
            fallback_username: DEFAULT_FALLBACK_USERNAME.to_string(),
            fallback_password: DEFAULT_FALLBACK_PASSWORD.to_string(),
        }
    }
}

impl AuthConfig {
    pub fn with_secure_cookie(mut self, secure: bool) -> Self {
        self.cookie.secure = secure;
        self
    }

    /// Set the absolute session lifetime; the cookie gets a matching Max-Age
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = Some(ttl);
        self.cookie.max_age_secs = Some(ttl.as_secs());
        self
    }

    pub fn with_fallback_account(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.fallback_username = username.into();
        self.fallback_password = password.into();
        self
    }

    pub fn session_cookie_name(&self) -> &str {
        &self.cookie.name
    }

    /// Session TTL as a chrono duration (saturating)
    pub fn session_ttl_chrono(&self) -> Option<chrono::Duration> {
        self.session_ttl
            .map(|ttl| chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX))
    }

    pub fn fallback_credentials(&self) -> StaticCredentialRepository {
        StaticCredentialRepository::single(&self.fallback_username, &self.fallback_password)
    }
}
