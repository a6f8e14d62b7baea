//! Blog Use Cases
//!
//! CRUD over blog posts. Authorization happens in the handlers before any
//! of these run; these methods only validate payloads and pass through to
//! the repository.

use std::sync::Arc;

use crate::domain::entity::{Blog, User};
use crate::domain::repository::BlogRepository;
use crate::domain::value_object::BlogId;
use crate::error::{ApiError, ApiResult};

/// Blog input fields (create and update share the same shape)
pub struct BlogInput {
    pub name: String,
    pub summary: String,
    pub content: String,
}

impl BlogInput {
    fn validate(self) -> ApiResult<(String, String, String)> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ApiError::invalid_field("name", "name cannot be empty."));
        }
        let summary = self.summary.trim().to_string();
        if summary.is_empty() {
            return Err(ApiError::invalid_field(
                "summary",
                "summary cannot be empty.",
            ));
        }
        let content = self.content.trim().to_string();
        if content.is_empty() {
            return Err(ApiError::invalid_field(
                "content",
                "content cannot be empty.",
            ));
        }
        Ok((name, summary, content))
    }
}

/// Blog use cases
pub struct BlogsUseCase<B>
where
    B: BlogRepository,
{
    blog_repo: Arc<B>,
}

impl<B> BlogsUseCase<B>
where
    B: BlogRepository,
{
    pub fn new(blog_repo: Arc<B>) -> Self {
        Self { blog_repo }
    }

    pub async fn create(&self, author: &User, input: BlogInput) -> ApiResult<Blog> {
        let (name, summary, content) = input.validate()?;

        let blog = Blog::new(author, name, summary, content);
        self.blog_repo.create(&blog).await?;

        tracing::info!(blog_id = %blog.blog_id, "blog created");
        Ok(blog)
    }

    pub async fn update(&self, blog_id: &BlogId, input: BlogInput) -> ApiResult<Blog> {
        let (name, summary, content) = input.validate()?;

        let mut blog = self
            .blog_repo
            .find_by_id(blog_id)
            .await?
            .ok_or(ApiError::NotFound("blog"))?;

        blog.name = name;
        blog.summary = summary;
        blog.content = content;
        self.blog_repo.update(&blog).await?;

        tracing::info!(blog_id = %blog.blog_id, "blog updated");
        Ok(blog)
    }

    pub async fn delete(&self, blog_id: &BlogId) -> ApiResult<()> {
        // Report missing blogs instead of silently deleting nothing.
        self.blog_repo
            .find_by_id(blog_id)
            .await?
            .ok_or(ApiError::NotFound("blog"))?;

        self.blog_repo.delete(blog_id).await?;

        tracing::info!(blog_id = %blog_id, "blog deleted");
        Ok(())
    }

    pub async fn get(&self, blog_id: &BlogId) -> ApiResult<Blog> {
        self.blog_repo
            .find_by_id(blog_id)
            .await?
            .ok_or(ApiError::NotFound("blog"))
    }

    pub async fn count(&self) -> ApiResult<i64> {
        self.blog_repo.count().await
    }

    pub async fn list(&self, offset: i64, limit: i64) -> ApiResult<Vec<Blog>> {
        self.blog_repo.list(offset, limit).await
    }
}
