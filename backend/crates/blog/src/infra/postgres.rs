//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::{Blog, Comment, User};
use crate::domain::repository::{BlogRepository, CommentRepository, UserRepository};
use crate::domain::value_object::{BlogId, CommentId, Email, PasswordDigest, UserId, UserName};
use crate::error::ApiResult;

/// PostgreSQL-backed repository covering users, blogs, and comments
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgBlogRepository {
    async fn create(&self, user: &User) -> ApiResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, passwd, admin, name, image, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.user_id.as_str())
        .bind(user.email.as_str())
        .bind(user.passwd.as_str())
        .bind(user.admin)
        .bind(user.name.as_str())
        .bind(&user.image)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> ApiResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, passwd, admin, name, image, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }

    async fn find_by_email(&self, email: &str) -> ApiResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, passwd, admin, name, image, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }

    async fn count(&self) -> ApiResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT count(id) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn list(&self, offset: i64, limit: i64) -> ApiResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, passwd, admin, name, image, created_at
            FROM users
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }
}

// ============================================================================
// Blog Repository Implementation
// ============================================================================

impl BlogRepository for PgBlogRepository {
    async fn create(&self, blog: &Blog) -> ApiResult<()> {
        sqlx::query(
            r#"
            INSERT INTO blogs (id, user_id, user_name, user_image, name, summary, content, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(blog.blog_id.as_str())
        .bind(blog.user_id.as_str())
        .bind(&blog.user_name)
        .bind(&blog.user_image)
        .bind(&blog.name)
        .bind(&blog.summary)
        .bind(&blog.content)
        .bind(blog.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, blog_id: &BlogId) -> ApiResult<Option<Blog>> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, user_id, user_name, user_image, name, summary, content, created_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(blog_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BlogRow::into_blog))
    }

    async fn update(&self, blog: &Blog) -> ApiResult<()> {
        sqlx::query(
            r#"
            UPDATE blogs
            SET name = $2, summary = $3, content = $4
            WHERE id = $1
            "#,
        )
        .bind(blog.blog_id.as_str())
        .bind(&blog.name)
        .bind(&blog.summary)
        .bind(&blog.content)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, blog_id: &BlogId) -> ApiResult<()> {
        sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(blog_id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> ApiResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT count(id) FROM blogs")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn list(&self, offset: i64, limit: i64) -> ApiResult<Vec<Blog>> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, user_id, user_name, user_image, name, summary, content, created_at
            FROM blogs
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BlogRow::into_blog).collect())
    }
}

// ============================================================================
// Comment Repository Implementation
// ============================================================================

impl CommentRepository for PgBlogRepository {
    async fn create(&self, comment: &Comment) -> ApiResult<()> {
        sqlx::query(
            r#"
            INSERT INTO comments (id, blog_id, user_id, user_name, user_image, content, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(comment.comment_id.as_str())
        .bind(comment.blog_id.as_str())
        .bind(comment.user_id.as_str())
        .bind(&comment.user_name)
        .bind(&comment.user_image)
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, comment_id: &CommentId) -> ApiResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, blog_id, user_id, user_name, user_image, content, created_at
            FROM comments
            WHERE id = $1
            "#,
        )
        .bind(comment_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CommentRow::into_comment))
    }

    async fn delete(&self, comment_id: &CommentId) -> ApiResult<()> {
        sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(comment_id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn count(&self) -> ApiResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT count(id) FROM comments")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn list(&self, offset: i64, limit: i64) -> ApiResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, blog_id, user_id, user_name, user_image, content, created_at
            FROM comments
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }

    async fn list_for_blog(&self, blog_id: &BlogId) -> ApiResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, blog_id, user_id, user_name, user_image, content, created_at
            FROM comments
            WHERE blog_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(blog_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    passwd: String,
    admin: bool,
    name: String,
    image: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_string(self.id),
            name: UserName::from_db(self.name),
            email: Email::from_db(self.email),
            passwd: PasswordDigest::from_db(self.passwd),
            image: self.image,
            admin: self.admin,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BlogRow {
    id: String,
    user_id: String,
    user_name: String,
    user_image: String,
    name: String,
    summary: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl BlogRow {
    fn into_blog(self) -> Blog {
        Blog {
            blog_id: BlogId::from_string(self.id),
            user_id: UserId::from_string(self.user_id),
            user_name: self.user_name,
            user_image: self.user_image,
            name: self.name,
            summary: self.summary,
            content: self.content,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: String,
    blog_id: String,
    user_id: String,
    user_name: String,
    user_image: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl CommentRow {
    fn into_comment(self) -> Comment {
        Comment {
            comment_id: CommentId::from_string(self.id),
            blog_id: BlogId::from_string(self.blog_id),
            user_id: UserId::from_string(self.user_id),
            user_name: self.user_name,
            user_image: self.user_image,
            content: self.content,
            created_at: self.created_at,
        }
    }
}
