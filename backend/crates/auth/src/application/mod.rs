//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod credential_verifier;
pub mod session_registry;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use check_session::{CheckSessionUseCase, SessionInfoOutput};
pub use config::AuthConfig;
pub use credential_verifier::{CredentialMatch, CredentialVerifier};
pub use session_registry::SessionRegistry;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
