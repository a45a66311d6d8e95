//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (CSPRNG tokens, SHA-256, URL-safe Base64)
//! - Stored password verification (Argon2id, legacy plaintext records)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
