//! Register User Use Case
//!
//! Creates a new account and issues the first session cookie.

use std::sync::Arc;

use crate::application::config::WebConfig;
use crate::application::session::SessionCodec;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{Email, PasswordDigest, UserName};
use crate::error::{ApiError, ApiResult};

/// Register input (raw request fields, validated here)
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub passwd: String,
}

/// Register output
pub struct RegisterOutput {
    /// The created user, digest already masked
    pub user: User,
    /// Session cookie value for the Set-Cookie header
    pub cookie_value: String,
}

/// Register use case
pub struct RegisterUserUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
    config: Arc<WebConfig>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>, config: Arc<WebConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> ApiResult<RegisterOutput> {
        let name = UserName::new(input.name)?;
        let email = Email::new(input.email)?;
        let client_digest = PasswordDigest::from_client(input.passwd)?;

        // Known gap: this existence check and the insert below are not
        // atomic. Two concurrent registrations for one email can both pass.
        let existing = self.user_repo.find_by_email(email.as_str()).await?;
        if !existing.is_empty() {
            return Err(ApiError::conflict("email", "Email is already in use."));
        }

        let mut user = User::new(name, email, &client_digest);
        self.user_repo.create(&user).await?;

        let codec = SessionCodec::new(self.config.session_secret.clone());
        let cookie_value = codec.encode(&user, self.config.session_ttl);

        user.mask_passwd();

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "user registered"
        );

        Ok(RegisterOutput { user, cookie_value })
    }
}
