//! Sign In Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::credential_verifier::CredentialVerifier;
use crate::application::session_registry::SessionRegistry;
use crate::domain::repository::{CredentialRepository, SessionRepository};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: ClearTextPassword,
}

/// Sign in output
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    pub username: String,
}

/// Sign in use case
pub struct SignInUseCase<C, S>
where
    C: CredentialRepository,
    S: SessionRepository,
{
    verifier: Arc<CredentialVerifier<C>>,
    registry: Arc<SessionRegistry<S>>,
}

impl<C, S> SignInUseCase<C, S>
where
    C: CredentialRepository,
    S: SessionRepository,
{
    pub fn new(verifier: Arc<CredentialVerifier<C>>, registry: Arc<SessionRegistry<S>>) -> Self {
        Self { verifier, registry }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        if !self.verifier.verify(&input.username, &input.password).await {
            return Err(AuthError::InvalidCredentials);
        }

        let session_token = self.registry.create(&input.username).await?;

        tracing::info!(username = %input.username, "User signed in");

        Ok(SignInOutput {
            session_token,
            username: input.username,
        })
    }
}
