//! Domain Layer
//!
//! Contains the ApiState entity and the repository trait.

pub mod entity;
pub mod repository;

pub use entity::{ApiState, ApiStatus};
pub use repository::ApiStateRepository;
