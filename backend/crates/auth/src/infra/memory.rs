//! Process-local Stores
//!
//! - [`StaticCredentialRepository`]: the built-in account(s)
//! - [`InMemorySessionRepository`]: the session map

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;

use platform::password::ClearTextPassword;
use tokio::sync::RwLock;

use crate::domain::entity::{credential::Credential, session::Session};
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Fixed credential mapping, consulted when the database can't vouch for a login
#[derive(Debug, Clone)]
pub struct StaticCredentialRepository {
    accounts: HashMap<String, Credential>,
}

impl StaticCredentialRepository {
    /// Mapping with a single built-in account
    pub fn single(username: impl Into<String>, password: impl Into<String>) -> Self {
        let credential = Credential::new(username, password);
        let mut accounts = HashMap::new();
        accounts.insert(credential.username.clone(), credential);
        Self { accounts }
    }

    pub fn check(&self, username: &str, password: &ClearTextPassword) -> bool {
        self.accounts
            .get(username)
            .is_some_and(|credential| credential.matches(password))
    }
}

/// Session map shared by all request handlers
///
/// With a TTL, expired entries are swept whenever a session is created.
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Option<Duration>,
}

impl InMemorySessionRepository {
    pub fn with_ttl(ttl: Option<Duration>) -> Self {
        Self {
            sessions: Arc::default(),
            ttl,
        }
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: &Session) -> AuthResult<()> {
        let mut sessions = self.sessions.write().await;
        if self.ttl.is_some() {
            let before = sessions.len();
            sessions.retain(|_, s| !s.is_expired(self.ttl));
            let swept = before - sessions.len();
            if swept > 0 {
                tracing::debug!(swept, "Swept expired sessions");
            }
        }
        sessions.insert(session.token.clone(), session.clone());
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> AuthResult<Option<Session>> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn delete(&self, token: &str) -> AuthResult<bool> {
        Ok(self.sessions.write().await.remove(token).is_some())
    }
}
