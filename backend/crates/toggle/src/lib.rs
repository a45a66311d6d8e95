//! Toggle (API switch state) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - ApiState entity, repository trait
//! - `application/` - Dual-backend state store
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, templates
//!
//! ## Availability Model
//! - One `ApiState` record per deployment, addressed by a fixed id
//! - Every operation tries the persistent backend first
//! - On backend failure the call is served from an in-memory record
//! - Fallback writes are never reconciled with the database

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::store::ApiStateStore;
pub use domain::entity::{ApiState, ApiStatus};
pub use error::{StateError, StateResult};
pub use infra::memory::MemoryApiStateRepository;
pub use infra::postgres::PgApiStateRepository;
pub use presentation::router::{admin_router, public_router};
