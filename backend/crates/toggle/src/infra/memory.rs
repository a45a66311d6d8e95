//! In-memory State Repository
//!
//! Transient record used when the database is disabled or failing.
//! Lost on restart.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::{ApiState, ApiStatus};
use crate::domain::repository::ApiStateRepository;
use crate::error::StateResult;

/// Process-local state record, default-initialized on construction
#[derive(Clone, Default)]
pub struct MemoryApiStateRepository {
    state: Arc<RwLock<ApiState>>,
}

impl MemoryApiStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> ApiState {
        self.state.read().await.clone()
    }

    pub async fn store_status(&self, status: ApiStatus) {
        self.state.write().await.status = status;
    }

    pub async fn store_message(&self, message: &str) {
        self.state.write().await.message = message.to_string();
    }
}

impl ApiStateRepository for MemoryApiStateRepository {
    async fn get_or_init(&self) -> StateResult<ApiState> {
        Ok(self.snapshot().await)
    }

    async fn set_status(&self, status: ApiStatus) -> StateResult<()> {
        self.store_status(status).await;
        Ok(())
    }

    async fn set_message(&self, message: &str) -> StateResult<()> {
        self.store_message(message).await;
        Ok(())
    }
}
