//! Infrastructure Layer
//!
//! Database implementations and process-local stores.

pub mod memory;
pub mod postgres;

pub use memory::{InMemorySessionRepository, StaticCredentialRepository};
pub use postgres::PgCredentialRepository;
