//! Infrastructure Layer
//!
//! PostgreSQL-backed and in-memory state repositories.

pub mod memory;
pub mod postgres;

pub use memory::MemoryApiStateRepository;
pub use postgres::PgApiStateRepository;
