//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Digest utilities (SHA-1/SHA-256 hex, constant-time comparison)
//! - Cookie configuration, parsing and serialization

pub mod cookie;
pub mod crypto;
