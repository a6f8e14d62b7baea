//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{Blog, Comment, User};
use crate::domain::value_object::{BlogId, CommentId, UserId};
use crate::error::ApiResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> ApiResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> ApiResult<Option<User>>;

    /// Find users by email (may return more than one; see registration race)
    async fn find_by_email(&self, email: &str) -> ApiResult<Vec<User>>;

    /// Count all users
    async fn count(&self) -> ApiResult<i64>;

    /// List users ordered by created_at desc
    async fn list(&self, offset: i64, limit: i64) -> ApiResult<Vec<User>>;
}

/// Blog repository trait
#[trait_variant::make(BlogRepository: Send)]
pub trait LocalBlogRepository {
    /// Create a new blog post
    async fn create(&self, blog: &Blog) -> ApiResult<()>;

    /// Find blog by ID
    async fn find_by_id(&self, blog_id: &BlogId) -> ApiResult<Option<Blog>>;

    /// Update a blog post
    async fn update(&self, blog: &Blog) -> ApiResult<()>;

    /// Delete a blog post
    async fn delete(&self, blog_id: &BlogId) -> ApiResult<()>;

    /// Count all blog posts
    async fn count(&self) -> ApiResult<i64>;

    /// List blog posts ordered by created_at desc
    async fn list(&self, offset: i64, limit: i64) -> ApiResult<Vec<Blog>>;
}

/// Comment repository trait
#[trait_variant::make(CommentRepository: Send)]
pub trait LocalCommentRepository {
    /// Create a new comment
    async fn create(&self, comment: &Comment) -> ApiResult<()>;

    /// Find comment by ID
    async fn find_by_id(&self, comment_id: &CommentId) -> ApiResult<Option<Comment>>;

    /// Delete a comment
    async fn delete(&self, comment_id: &CommentId) -> ApiResult<()>;

    /// Count all comments
    async fn count(&self) -> ApiResult<i64>;

    /// List comments ordered by created_at desc
    async fn list(&self, offset: i64, limit: i64) -> ApiResult<Vec<Comment>>;

    /// List comments for one blog, oldest first
    async fn list_for_blog(&self, blog_id: &BlogId) -> ApiResult<Vec<Comment>>;
}
