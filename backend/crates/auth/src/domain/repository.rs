//! Repository Traits
//!
//! Interfaces for credential lookup and session storage.
//! Implementations are in the infrastructure layer.

use crate::domain::entity::{credential::Credential, session::Session};
use crate::error::AuthResult;

/// Credential lookup
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find the credential provisioned for `username`
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Credential>>;
}

/// Session storage
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Store a new session
    async fn create(&self, session: &Session) -> AuthResult<()>;

    /// Find a session by its token
    async fn find_by_token(&self, token: &str) -> AuthResult<Option<Session>>;

    /// Delete a session; `true` if it existed
    async fn delete(&self, token: &str) -> AuthResult<bool>;
}
