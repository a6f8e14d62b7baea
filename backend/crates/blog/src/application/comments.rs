//! Comment Use Cases

use std::sync::Arc;

use crate::domain::entity::{Comment, User};
use crate::domain::repository::{BlogRepository, CommentRepository};
use crate::domain::value_object::{BlogId, CommentId};
use crate::error::{ApiError, ApiResult};

/// Comment use cases
pub struct CommentsUseCase<B, C>
where
    B: BlogRepository,
    C: CommentRepository,
{
    blog_repo: Arc<B>,
    comment_repo: Arc<C>,
}

impl<B, C> CommentsUseCase<B, C>
where
    B: BlogRepository,
    C: CommentRepository,
{
    pub fn new(blog_repo: Arc<B>, comment_repo: Arc<C>) -> Self {
        Self {
            blog_repo,
            comment_repo,
        }
    }

    pub async fn create(
        &self,
        blog_id: BlogId,
        author: &User,
        content: String,
    ) -> ApiResult<Comment> {
        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(ApiError::invalid_field(
                "content",
                "content cannot be empty.",
            ));
        }

        // Comments attach to existing blogs only.
        self.blog_repo
            .find_by_id(&blog_id)
            .await?
            .ok_or(ApiError::NotFound("blog"))?;

        let comment = Comment::new(blog_id, author, content);
        self.comment_repo.create(&comment).await?;

        tracing::info!(
            comment_id = %comment.comment_id,
            blog_id = %comment.blog_id,
            "comment created"
        );
        Ok(comment)
    }

    pub async fn delete(&self, comment_id: &CommentId) -> ApiResult<()> {
        self.comment_repo
            .find_by_id(comment_id)
            .await?
            .ok_or(ApiError::NotFound("comment"))?;

        self.comment_repo.delete(comment_id).await?;

        tracing::info!(comment_id = %comment_id, "comment deleted");
        Ok(())
    }

    pub async fn count(&self) -> ApiResult<i64> {
        self.comment_repo.count().await
    }

    pub async fn list(&self, offset: i64, limit: i64) -> ApiResult<Vec<Comment>> {
        self.comment_repo.list(offset, limit).await
    }

    pub async fn list_for_blog(&self, blog_id: &BlogId) -> ApiResult<Vec<Comment>> {
        self.comment_repo.list_for_blog(blog_id).await
    }
}
