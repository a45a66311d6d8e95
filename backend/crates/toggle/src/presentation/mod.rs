//! Presentation Layer
//!
//! HTTP handlers, DTOs, templates and router.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod templates;

pub use handlers::ToggleAppState;
pub use router::{admin_router, public_router};
