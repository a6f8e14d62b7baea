//! Presentation Layer DTOs
//!
//! Request/response bodies for the JSON API. Response views never carry a
//! real password digest; `passwd` is always the mask.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::{Blog, Comment, User};
use crate::domain::value_object::PASSWD_MASK;

/// Page size for every listing endpoint
pub const PAGE_SIZE: i64 = 10;

/// Register request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub passwd: String,
}

/// Authenticate request
#[derive(Debug, Deserialize)]
pub struct AuthenticateRequest {
    pub email: String,
    pub passwd: String,
}

/// Blog create/update request
#[derive(Debug, Deserialize)]
pub struct BlogRequest {
    pub name: String,
    pub summary: String,
    pub content: String,
}

/// Comment create request
#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub content: String,
}

/// `?page=N` query for listing endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

impl PageQuery {
    /// 1-based page index; anything below 1 clamps to the first page.
    pub fn page_index(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}

/// Pagination envelope included in listing responses
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub item_count: i64,
    pub page_index: i64,
    pub page_count: i64,
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    pub fn new(item_count: i64, page_index: i64) -> Self {
        let page_count = item_count / PAGE_SIZE + i64::from(item_count % PAGE_SIZE > 0);
        if item_count == 0 || page_index > page_count {
            return Self {
                item_count,
                page_index,
                page_count,
                offset: 0,
                limit: 0,
            };
        }
        Self {
            item_count,
            page_index,
            page_count,
            offset: PAGE_SIZE * (page_index - 1),
            limit: PAGE_SIZE,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }
}

/// User response view
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub passwd: &'static str,
    pub image: String,
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id.into_string(),
            name: user.name.into_db(),
            email: user.email.into_db(),
            passwd: PASSWD_MASK,
            image: user.image,
            admin: user.admin,
            created_at: user.created_at,
        }
    }
}

/// Blog response view
#[derive(Debug, Clone, Serialize)]
pub struct BlogView {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_image: String,
    pub name: String,
    pub summary: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Blog> for BlogView {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.blog_id.into_string(),
            user_id: blog.user_id.into_string(),
            user_name: blog.user_name,
            user_image: blog.user_image,
            name: blog.name,
            summary: blog.summary,
            content: blog.content,
            created_at: blog.created_at,
        }
    }
}

/// Comment response view
#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
    pub id: String,
    pub blog_id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_image: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentView {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.comment_id.into_string(),
            blog_id: comment.blog_id.into_string(),
            user_id: comment.user_id.into_string(),
            user_name: comment.user_name,
            user_image: comment.user_image,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

/// Paged user listing
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub page: Page,
    pub users: Vec<UserView>,
}

/// Paged blog listing
#[derive(Debug, Serialize)]
pub struct BlogListResponse {
    pub page: Page,
    pub blogs: Vec<BlogView>,
}

/// Paged comment listing
#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub page: Page,
    pub comments: Vec<CommentView>,
}

/// Comments attached to one blog (not paged)
#[derive(Debug, Serialize)]
pub struct BlogCommentsResponse {
    pub comments: Vec<CommentView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_math_covers_partial_last_page() {
        let page = Page::new(25, 3);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.offset, 20);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn page_math_exact_multiple() {
        let page = Page::new(20, 2);
        assert_eq!(page.page_count, 2);
        assert_eq!(page.offset, 10);
    }

    #[test]
    fn page_past_the_end_yields_empty_window() {
        let page = Page::new(5, 4);
        assert_eq!(page.page_count, 1);
        assert!(page.is_empty());
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn page_with_no_items() {
        let page = Page::new(0, 1);
        assert_eq!(page.page_count, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn page_query_clamps_to_first_page() {
        assert_eq!(PageQuery { page: Some(0) }.page_index(), 1);
        assert_eq!(PageQuery { page: Some(-3) }.page_index(), 1);
        assert_eq!(PageQuery { page: None }.page_index(), 1);
        assert_eq!(PageQuery { page: Some(7) }.page_index(), 7);
    }

    #[test]
    fn user_view_always_masks_the_digest() {
        use crate::domain::value_object::{Email, PasswordDigest, UserName};

        let client =
            PasswordDigest::from_client("0123456789abcdef0123456789abcdef01234567").unwrap();
        let user = User::new(
            UserName::new("Alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
            &client,
        );
        let view = UserView::from(user);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["passwd"], "******");
        assert_eq!(json["email"], "alice@example.com");
    }
}
