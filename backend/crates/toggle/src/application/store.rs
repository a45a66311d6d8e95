//! Dual-backend State Store
//!
//! Tries the persistent repository first and serves the call from the
//! in-memory record when it fails. There is no retry and no reconciliation:
//! a write that lands in memory is invisible to the database, and the two
//! records can drift apart until the next successful persistent write.

use std::sync::Arc;

use crate::domain::entity::{ApiState, ApiStatus};
use crate::domain::repository::ApiStateRepository;
use crate::infra::memory::MemoryApiStateRepository;

/// Which backend the store was configured with at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateBackend {
    /// Persistent repository with in-memory fallback
    Persistent,
    /// In-memory record only
    Memory,
}

/// State store shared by all handlers
pub struct ApiStateStore<R>
where
    R: ApiStateRepository + Send + Sync + 'static,
{
    primary: Option<Arc<R>>,
    fallback: MemoryApiStateRepository,
}

impl<R> ApiStateStore<R>
where
    R: ApiStateRepository + Send + Sync + 'static,
{
    /// Store backed by `primary`, falling back to a fresh in-memory record
    pub fn new(primary: R) -> Self {
        Self {
            primary: Some(Arc::new(primary)),
            fallback: MemoryApiStateRepository::new(),
        }
    }

    /// Store with the persistent backend disabled
    pub fn memory_only() -> Self {
        Self {
            primary: None,
            fallback: MemoryApiStateRepository::new(),
        }
    }

    /// Store from the startup capability flag
    pub fn from_capability(primary: Option<R>) -> Self {
        match primary {
            Some(repo) => Self::new(repo),
            None => Self::memory_only(),
        }
    }

    pub fn backend(&self) -> StateBackend {
        if self.primary.is_some() {
            StateBackend::Persistent
        } else {
            StateBackend::Memory
        }
    }

    /// Current record; never fails
    pub async fn get_state(&self) -> ApiState {
        if let Some(primary) = &self.primary {
            match primary.get_or_init().await {
                Ok(state) => return state,
                Err(e) => e.log_fallback("get_state"),
            }
        }

        self.fallback.snapshot().await
    }

    pub async fn set_status(&self, status: ApiStatus) {
        if let Some(primary) = &self.primary {
            match primary.set_status(status).await {
                Ok(()) => return,
                Err(e) => e.log_fallback("set_status"),
            }
        }

        self.fallback.store_status(status).await;
        tracing::info!(status = %status, backend = "memory", "API status updated");
    }

    pub async fn set_message(&self, message: &str) {
        if let Some(primary) = &self.primary {
            match primary.set_message(message).await {
                Ok(()) => return,
                Err(e) => e.log_fallback("set_message"),
            }
        }

        self.fallback.store_message(message).await;
        tracing::info!(
            message_len = message.len(),
            backend = "memory",
            "API message updated"
        );
    }
}
