//! Authenticate Use Case
//!
//! Verifies an email/digest pair and issues a session cookie.

use std::sync::Arc;

use crate::application::config::WebConfig;
use crate::application::session::SessionCodec;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::PasswordDigest;
use crate::error::{ApiError, ApiResult};

/// Authenticate input
pub struct AuthenticateInput {
    pub email: String,
    pub passwd: String,
}

/// Authenticate output
pub struct AuthenticateOutput {
    /// The authenticated user, digest already masked
    pub user: User,
    /// Session cookie value for the Set-Cookie header
    pub cookie_value: String,
}

/// Authenticate use case
pub struct AuthenticateUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<WebConfig>,
}

impl<R> AuthenticateUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<WebConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: AuthenticateInput) -> ApiResult<AuthenticateOutput> {
        if input.email.is_empty() {
            return Err(ApiError::invalid_field("email", "Invalid email."));
        }
        let client_digest = PasswordDigest::from_client(input.passwd)?;

        let users = self.user_repo.find_by_email(&input.email).await?;
        let Some(user) = users.into_iter().next() else {
            return Err(ApiError::invalid_field("email", "Email not exist."));
        };

        if !user.verify_passwd(&client_digest) {
            return Err(ApiError::invalid_field("passwd", "Invalid password."));
        }

        let codec = SessionCodec::new(self.config.session_secret.clone());
        let cookie_value = codec.encode(&user, self.config.session_ttl);

        let mut user = user;
        user.mask_passwd();

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "user authenticated"
        );

        Ok(AuthenticateOutput { user, cookie_value })
    }
}
