//! Repository Traits
//!
//! Interface for state persistence. Implementations are in the infra layer.

use crate::domain::entity::{ApiState, ApiStatus};
use crate::error::StateResult;

/// ApiState repository trait
///
/// Both implementations must behave the same way: reads never observe a
/// missing record, writes create the record when absent.
#[trait_variant::make(ApiStateRepository: Send)]
pub trait LocalApiStateRepository {
    /// Return the record, storing the default first if there is none
    async fn get_or_init(&self) -> StateResult<ApiState>;

    /// Upsert the status field
    async fn set_status(&self, status: ApiStatus) -> StateResult<()>;

    /// Upsert the message field
    async fn set_message(&self, message: &str) -> StateResult<()>;
}
