//! Cryptographic Utilities
//!
//! Hex-encoded digests for the credential and session-signature scheme.

use sha1::Sha1;
use sha2::{Digest, Sha256};

fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;

    bytes.iter().fold(
        String::with_capacity(bytes.len() * 2),
        |mut out, b| {
            let _ = write!(out, "{:02x}", b);
            out
        },
    )
}

/// Compute a SHA-1 digest as 40 lowercase hex characters.
///
/// Stored password digests and session signatures both use this form.
pub fn sha1_hex(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    to_hex(&hasher.finalize())
}

/// Compute a SHA-256 digest as 64 lowercase hex characters.
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    to_hex(&hasher.finalize())
}

/// Generate random bytes (dev-time secret generation).
pub fn random_bytes(len: usize) -> Vec<u8> {
    use rand::RngCore;

    let mut bytes = vec![0u8; len];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Constant-time comparison to prevent timing attacks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
