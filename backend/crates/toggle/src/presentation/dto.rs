//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::{ApiState, ApiStatus};

/// POST /toggle request
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleRequest {
    pub status: ApiStatus,
}

/// POST /update-message request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMessageRequest {
    pub message: String,
}

/// Acknowledgement for admin writes
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// GET /api/status response
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: ApiStatus,
    pub message: String,
}

impl From<ApiState> for StatusResponse {
    fn from(state: ApiState) -> Self {
        Self {
            status: state.status,
            message: state.message,
        }
    }
}
