//! User Listing Use Case
//!
//! Management listing; the admin check happens in the handler.

use std::sync::Arc;

use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::ApiResult;

/// List users use case
pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn count(&self) -> ApiResult<i64> {
        self.user_repo.count().await
    }

    pub async fn list(&self, offset: i64, limit: i64) -> ApiResult<Vec<User>> {
        self.user_repo.list(offset, limit).await
    }
}
