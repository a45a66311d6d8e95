//! ApiState Entity
//!
//! The single switch record exposed by `/api/status`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fixed identifier of the one state record
pub const STATE_ID: &str = "current_state";

/// Message shown before anyone has edited it
pub const DEFAULT_MESSAGE: &str = "API is currently disabled";

/// Whether the advertised API is switched on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    On,
    #[default]
    Off,
}

impl ApiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStatus::On => "on",
            ApiStatus::Off => "off",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, ApiStatus::On)
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(ApiStatus::On),
            "off" => Ok(ApiStatus::Off),
            other => Err(format!("unknown status '{other}'")),
        }
    }
}

/// Switch record: status flag plus free-form message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiState {
    pub status: ApiStatus,
    pub message: String,
}

impl Default for ApiState {
    fn default() -> Self {
        Self {
            status: ApiStatus::Off,
            message: DEFAULT_MESSAGE.to_string(),
        }
    }
}
