//! Password Hashing and Verification
//!
//! Stored credentials come in two shapes:
//! - Argon2id PHC strings (`$argon2id$v=19$...`), written by provisioning
//! - Plaintext values left over from records created by hand
//!
//! Plaintext records are a known security defect. They still verify, but
//! callers are told via [`StoredFormat`] so the record can be flagged for
//! rehashing.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::digest_eq;

/// PHC identifier prefix for every Argon2 variant
const ARGON2_PREFIX: &str = "$argon2";

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`, and `Debug` output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a submitted password. No policy is applied: login must accept
    /// whatever the credential store was provisioned with.
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id (PHC string format)
    pub fn hash(&self) -> Result<String, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);

        // OWASP recommended Argon2id parameters (crate defaults):
        // m=19456 (19 MiB), t=2, p=1
        let hash = Argon2::default()
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Verify against a stored password value of either format
    pub fn verify(&self, stored: &str) -> bool {
        match StoredFormat::detect(stored) {
            StoredFormat::Argon2 => match PasswordHash::new(stored) {
                Ok(parsed) => Argon2::default()
                    .verify_password(self.as_bytes(), &parsed)
                    .is_ok(),
                Err(_) => false,
            },
            StoredFormat::Plaintext => digest_eq(self.as_bytes(), stored.as_bytes()),
        }
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

impl From<String> for ClearTextPassword {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

// ============================================================================
// Stored Format
// ============================================================================

/// How a stored password value is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredFormat {
    Argon2,
    Plaintext,
}

impl StoredFormat {
    pub fn detect(stored: &str) -> Self {
        if stored.starts_with(ARGON2_PREFIX) {
            StoredFormat::Argon2
        } else {
            StoredFormat::Plaintext
        }
    }

    pub fn needs_rehash(&self) -> bool {
        matches!(self, StoredFormat::Plaintext)
    }
}
