//! Password Digest Value Object
//!
//! The server never sees a plaintext password: clients transmit a 40-hex
//! SHA-1 digest, and the stored credential is a second digest over
//! `user_id + ":" + client_digest`. Before any client-facing serialization
//! the stored digest is replaced with [`PASSWD_MASK`].

use crate::domain::value_object::user_id::UserId;
use crate::error::{ApiError, ApiResult};
use platform::crypto;
use serde::{Deserialize, Serialize};

/// Masking placeholder substituted for the real digest.
pub const PASSWD_MASK: &str = "******";

/// A 40-hex-character credential digest (or the masking placeholder).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Validate a client-supplied digest: exactly 40 lowercase hex chars.
    pub fn from_client(digest: impl Into<String>) -> ApiResult<Self> {
        let digest = digest.into();

        if !Self::is_valid_format(&digest) {
            return Err(ApiError::invalid_field("passwd", "Invalid password."));
        }

        Ok(Self(digest))
    }

    fn is_valid_format(digest: &str) -> bool {
        digest.len() == 40
            && digest
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    /// Derive the at-rest credential: `sha1_hex(user_id + ":" + client_digest)`.
    pub fn derive(user_id: &UserId, client_digest: &PasswordDigest) -> Self {
        let material = format!("{}:{}", user_id.as_str(), client_digest.as_str());
        Self(crypto::sha1_hex(material.as_bytes()))
    }

    /// Create from database value (assumed already derived)
    pub fn from_db(digest: impl Into<String>) -> Self {
        Self(digest.into())
    }

    /// The masking placeholder.
    pub fn masked() -> Self {
        Self(PASSWD_MASK.to_string())
    }

    pub fn is_masked(&self) -> bool {
        self.0 == PASSWD_MASK
    }

    /// Constant-time equality against another digest.
    pub fn matches(&self, other: &PasswordDigest) -> bool {
        crypto::constant_time_eq(self.0.as_bytes(), other.0.as_bytes())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_db(self) -> String {
        self.0
    }
}

// Never leak a digest through debug output.
impl std::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PasswordDigest").field(&PASSWD_MASK).finish()
    }
}
