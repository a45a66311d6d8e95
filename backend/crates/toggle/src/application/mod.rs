//! Application Layer
//!
//! The dual-backend state store.

pub mod store;

pub use store::{ApiStateStore, StateBackend};
