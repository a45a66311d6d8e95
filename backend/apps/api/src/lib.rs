//! API Switch server library
//!
//! Configuration, pool lifecycle, and router composition shared by the
//! `api` server and the `init_db` provisioning binary.

pub mod app;
pub mod config;
pub mod db;

// Re-export unified error types for use in handlers
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
