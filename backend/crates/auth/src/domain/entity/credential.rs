//! Credential Entity
//!
//! A provisioned username/password pair. Read-only for the running service.

use std::fmt;

use platform::password::{ClearTextPassword, StoredFormat};

#[derive(Clone)]
pub struct Credential {
    pub username: String,
    /// Stored value: Argon2id PHC string or legacy plaintext
    pub password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn matches(&self, candidate: &ClearTextPassword) -> bool {
        candidate.verify(&self.password)
    }

    pub fn stored_format(&self) -> StoredFormat {
        StoredFormat::detect(&self.password)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
