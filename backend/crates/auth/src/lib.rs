//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Credential and session entities, repository traits
//! - `application/` - Credential verification, session registry, sign-in
//! - `infra/` - PostgreSQL credentials, static and in-memory stores
//! - `presentation/` - Login pages, handlers, session gate, router
//!
//! ## Security Model
//! - Sessions are opaque 256-bit tokens in an HttpOnly cookie
//! - Sessions live in process memory only; a restart signs everyone out
//! - A credential backend failure falls back to the built-in account
//! - Stored passwords may be Argon2id or (flagged) plaintext

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::credential_verifier::CredentialVerifier;
pub use application::session_registry::SessionRegistry;
pub use error::{AuthError, AuthResult};
pub use infra::memory::{InMemorySessionRepository, StaticCredentialRepository};
pub use infra::postgres::PgCredentialRepository;
pub use presentation::handlers::AuthAppState;
pub use presentation::middleware::{CurrentSession, require_session};
pub use presentation::router::auth_router;

#[cfg(test)]
mod tests;
