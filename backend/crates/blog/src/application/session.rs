//! Session Token Codec
//!
//! Encodes and decodes the self-signed session cookie. The scheme is
//! stateless: the cookie value is `user_id-expires-signature`, where
//! `signature = sha1_hex(user_id-stored_digest-expires-secret)`. Verifying
//! it needs only the user row and the process-wide secret; changing the
//! stored password digest invalidates every outstanding cookie for that
//! user, which is the intended revocation mechanism.
//!
//! Decoding fails open: every malformed, expired, tampered or otherwise
//! unreadable cookie (including repository failures during lookup) resolves
//! to an anonymous identity. Nothing in this module returns an error to its
//! caller.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::UserId;
use crate::error::ApiResult;
use platform::crypto;

/// Compute the signature digest over parts joined with `-`.
pub fn signature_digest(parts: &[&str]) -> String {
    crypto::sha1_hex(parts.join("-").as_bytes())
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Session token codec
#[derive(Debug, Clone)]
pub struct SessionCodec {
    secret: String,
}

impl SessionCodec {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Encode a session cookie value for `user`, valid for `ttl`.
    ///
    /// The user must carry its real stored digest; encoding a masked user
    /// would produce a signature that never verifies.
    pub fn encode(&self, user: &User, ttl: Duration) -> String {
        let expires = unix_now() + ttl.as_secs() as i64;
        let expires_str = expires.to_string();

        let signature = signature_digest(&[
            user.user_id.as_str(),
            user.passwd.as_str(),
            &expires_str,
            &self.secret,
        ]);

        format!("{}-{}-{}", user.user_id.as_str(), expires_str, signature)
    }

    /// Decode a cookie value, returning the referenced user with its digest
    /// masked, or `None` for anything unverifiable.
    pub async fn decode<R>(&self, repo: &R, cookie_value: &str) -> Option<User>
    where
        R: UserRepository,
    {
        match self.try_decode(repo, cookie_value).await {
            Ok(user) => user,
            Err(e) => {
                // Fail-open boundary: a lookup failure is an anonymous
                // request, not an error response.
                tracing::info!(error = %e, "session cookie lookup failed, treating as anonymous");
                None
            }
        }
    }

    async fn try_decode<R>(&self, repo: &R, cookie_value: &str) -> ApiResult<Option<User>>
    where
        R: UserRepository,
    {
        if cookie_value.is_empty() {
            return Ok(None);
        }

        let parts: Vec<&str> = cookie_value.split('-').collect();
        let &[uid, expires_str, signature] = parts.as_slice() else {
            tracing::debug!("malformed session cookie");
            return Ok(None);
        };

        let Ok(expires) = expires_str.parse::<i64>() else {
            tracing::debug!("non-numeric expiry in session cookie");
            return Ok(None);
        };

        if expires < unix_now() {
            tracing::debug!("expired session cookie");
            return Ok(None);
        }

        let user_id = UserId::from_string(uid);
        let Some(mut user) = repo.find_by_id(&user_id).await? else {
            tracing::debug!("session cookie references unknown user");
            return Ok(None);
        };

        let expected = signature_digest(&[uid, user.passwd.as_str(), expires_str, &self.secret]);
        if !crypto::constant_time_eq(expected.as_bytes(), signature.as_bytes()) {
            // Tampered, or the password changed since issuance.
            tracing::info!("invalid session cookie signature");
            return Ok(None);
        }

        user.mask_passwd();
        Ok(Some(user))
    }
}
