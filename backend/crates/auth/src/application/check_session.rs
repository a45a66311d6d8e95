//! Check Session Use Case
//!
//! Verifies a session token and retrieves its owner.

use std::sync::Arc;

use crate::application::session_registry::SessionRegistry;
use crate::domain::repository::SessionRepository;
use crate::error::{AuthError, AuthResult};

/// Session info output
#[derive(Debug, Clone)]
pub struct SessionInfoOutput {
    pub username: String,
}

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    registry: Arc<SessionRegistry<S>>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(registry: Arc<SessionRegistry<S>>) -> Self {
        Self { registry }
    }

    /// Check if session is valid and return session info
    pub async fn execute(&self, session_token: &str) -> AuthResult<SessionInfoOutput> {
        self.registry
            .resolve(session_token)
            .await?
            .map(|username| SessionInfoOutput { username })
            .ok_or(AuthError::SessionInvalid)
    }

    /// Just check if session is valid (returns bool)
    pub async fn is_valid(&self, session_token: &str) -> bool {
        self.execute(session_token).await.is_ok()
    }
}
