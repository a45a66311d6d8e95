//! Session Entity
//!
//! Proof of a prior successful login. Held in process memory only.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque URL-safe token, also the cookie value
    pub token: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a session with a fresh random token
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            token: platform::crypto::random_token(),
            username: username.into(),
            created_at: Utc::now(),
        }
    }

    /// Sessions without a TTL, or whose deadline is past the representable
    /// range, never expire
    pub fn is_expired(&self, ttl: Option<Duration>) -> bool {
        ttl.and_then(|ttl| self.created_at.checked_add_signed(ttl))
            .is_some_and(|deadline| Utc::now() > deadline)
    }
}
