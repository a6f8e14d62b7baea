//! Blog Entity

use chrono::{DateTime, Utc};

use crate::domain::entity::user::User;
use crate::domain::value_object::{BlogId, UserId};

/// Blog post entity
///
/// Author name and avatar are denormalized onto the row so listings render
/// without a join.
#[derive(Debug, Clone)]
pub struct Blog {
    pub blog_id: BlogId,
    pub user_id: UserId,
    pub user_name: String,
    pub user_image: String,
    pub name: String,
    pub summary: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog post authored by `author`.
    pub fn new(author: &User, name: String, summary: String, content: String) -> Self {
        Self {
            blog_id: BlogId::generate(),
            user_id: author.user_id.clone(),
            user_name: author.name.as_str().to_string(),
            user_image: author.image.clone(),
            name,
            summary,
            content,
            created_at: Utc::now(),
        }
    }
}
