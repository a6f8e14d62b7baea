//! User Entity
//!
//! The only entity the auth core reads. The stored credential is always a
//! derived digest (see `PasswordDigest::derive`), never a raw password, and
//! is masked before any client-facing serialization.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{Email, PasswordDigest, UserId, UserName};
use platform::crypto;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Time-orderable opaque identifier
    pub user_id: UserId,
    /// Display name
    pub name: UserName,
    /// Unique email (uniqueness enforced only by the registration check)
    pub email: Email,
    /// Stored credential digest, or the mask after redaction
    pub passwd: PasswordDigest,
    /// Avatar URL
    pub image: String,
    /// Elevated privilege flag
    pub admin: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from validated registration input.
    ///
    /// Derives the stored credential from the fresh id and the
    /// client-supplied digest, and points the avatar at a gravatar built
    /// from a SHA-256 of the email.
    pub fn new(name: UserName, email: Email, client_digest: &PasswordDigest) -> Self {
        let user_id = UserId::generate();
        let passwd = PasswordDigest::derive(&user_id, client_digest);
        let image = format!(
            "https://www.gravatar.com/avatar/{}?d=mm&s=120",
            crypto::sha256_hex(email.as_str().as_bytes())
        );

        Self {
            user_id,
            name,
            email,
            passwd,
            image,
            admin: false,
            created_at: Utc::now(),
        }
    }

    /// Replace the stored digest with the masking placeholder.
    pub fn mask_passwd(&mut self) {
        self.passwd = PasswordDigest::masked();
    }

    /// Verify a client-supplied digest against the stored credential.
    pub fn verify_passwd(&self, client_digest: &PasswordDigest) -> bool {
        let derived = PasswordDigest::derive(&self.user_id, client_digest);
        self.passwd.matches(&derived)
    }
}
