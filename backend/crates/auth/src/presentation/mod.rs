//! Presentation Layer
//!
//! HTTP handlers, DTOs, templates, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod templates;

pub use handlers::AuthAppState;
pub use middleware::{CurrentSession, require_session};
pub use router::auth_router;
