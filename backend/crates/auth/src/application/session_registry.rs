//! Session Registry
//!
//! Maps opaque session tokens to usernames.

use std::sync::Arc;

use chrono::Duration;

use crate::domain::entity::session::Session;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

pub struct SessionRegistry<S>
where
    S: SessionRepository,
{
    repo: Arc<S>,
    ttl: Option<Duration>,
}

impl<S> SessionRegistry<S>
where
    S: SessionRepository,
{
    pub fn new(repo: Arc<S>, ttl: Option<Duration>) -> Self {
        Self { repo, ttl }
    }

    /// Register a new session and return its token
    pub async fn create(&self, username: &str) -> AuthResult<String> {
        let session = Session::new(username);
        self.repo.create(&session).await?;
        Ok(session.token)
    }

    /// Username behind `token`, or `None`. Expired sessions are removed.
    pub async fn resolve(&self, token: &str) -> AuthResult<Option<String>> {
        let Some(session) = self.repo.find_by_token(token).await? else {
            return Ok(None);
        };

        if session.is_expired(self.ttl) {
            self.repo.delete(token).await?;
            tracing::debug!(username = %session.username, "Session expired");
            return Ok(None);
        }

        Ok(Some(session.username))
    }

    /// Remove a session; `true` if it existed
    pub async fn destroy(&self, token: &str) -> AuthResult<bool> {
        self.repo.delete(token).await
    }
}
