//! Comment Entity

use chrono::{DateTime, Utc};

use crate::domain::entity::user::User;
use crate::domain::value_object::{BlogId, CommentId, UserId};

/// Comment entity, with the author snapshot denormalized like `Blog`.
#[derive(Debug, Clone)]
pub struct Comment {
    pub comment_id: CommentId,
    pub blog_id: BlogId,
    pub user_id: UserId,
    pub user_name: String,
    pub user_image: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment on `blog_id` authored by `author`.
    pub fn new(blog_id: BlogId, author: &User, content: String) -> Self {
        Self {
            comment_id: CommentId::generate(),
            blog_id,
            user_id: author.user_id.clone(),
            user_name: author.name.as_str().to_string(),
            user_image: author.image.clone(),
            content,
            created_at: Utc::now(),
        }
    }
}
