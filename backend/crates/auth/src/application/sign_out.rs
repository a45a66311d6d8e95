//! Sign Out Use Case
//!
//! Invalidates a user session.

use std::sync::Arc;

use crate::application::session_registry::SessionRegistry;
use crate::domain::repository::SessionRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionRepository,
{
    registry: Arc<SessionRegistry<S>>,
}

impl<S> SignOutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(registry: Arc<SessionRegistry<S>>) -> Self {
        Self { registry }
    }

    /// Sign out from current session
    pub async fn execute(&self, session_token: &str, username: &str) -> AuthResult<()> {
        if self.registry.destroy(session_token).await? {
            tracing::info!(username = %username, "User signed out");
        }
        Ok(())
    }
}
