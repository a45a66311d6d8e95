//! Credential Verifier
//!
//! Decides whether a username/password pair may sign in.
//!
//! The persistent store is consulted first. A backend error, a missing
//! record, or a wrong password all fall through to the built-in account,
//! so `admin` keeps working while the database is unreachable.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::repository::CredentialRepository;
use crate::infra::memory::StaticCredentialRepository;

/// Which credential source admitted a login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialMatch {
    /// The persistent store's record matched
    Stored,
    /// The built-in account matched; the store had no usable record
    BuiltIn,
    /// The built-in account matched although the store holds a different
    /// password for the same username
    BuiltInOverStored,
    Rejected,
}

impl CredentialMatch {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, CredentialMatch::Rejected)
    }
}

pub struct CredentialVerifier<C>
where
    C: CredentialRepository,
{
    primary: Option<Arc<C>>,
    fallback: StaticCredentialRepository,
}

impl<C> CredentialVerifier<C>
where
    C: CredentialRepository,
{
    /// `None` disables the persistent store
    pub fn from_capability(primary: Option<C>, fallback: StaticCredentialRepository) -> Self {
        Self {
            primary: primary.map(Arc::new),
            fallback,
        }
    }

    pub async fn verify(&self, username: &str, password: &ClearTextPassword) -> bool {
        self.check(username, password).await.is_accepted()
    }

    pub async fn check(&self, username: &str, password: &ClearTextPassword) -> CredentialMatch {
        let mut stored_mismatch = false;

        if let Some(primary) = &self.primary {
            match primary.find_by_username(username).await {
                Ok(Some(credential)) => {
                    if credential.stored_format().needs_rehash() {
                        tracing::warn!(
                            username = %credential.username,
                            "Stored password is plaintext; rehash with init_db"
                        );
                    }
                    if credential.matches(password) {
                        return CredentialMatch::Stored;
                    }
                    stored_mismatch = true;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Credential backend unavailable, using built-in account"
                    );
                }
            }
        }

        if !self.fallback.check(username, password) {
            return CredentialMatch::Rejected;
        }

        if stored_mismatch {
            tracing::warn!(
                username = %username,
                "Built-in account admitted a login whose stored password differs"
            );
            CredentialMatch::BuiltInOverStored
        } else {
            CredentialMatch::BuiltIn
        }
    }
}
