//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{credential::Credential, session::Session};
pub use repository::{CredentialRepository, SessionRepository};
