//! HTTP Handlers
//!
//! Thin adapters between axum and the use cases. Handlers are generic over
//! one repository type implementing all three repository traits so the same
//! code serves Postgres in production and the in-memory repository in tests.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::authenticate::{AuthenticateInput, AuthenticateUseCase};
use crate::application::blogs::{BlogInput, BlogsUseCase};
use crate::application::comments::CommentsUseCase;
use crate::application::config::WebConfig;
use crate::application::register::{RegisterInput, RegisterUserUseCase};
use crate::application::users::ListUsersUseCase;
use crate::domain::repository::{BlogRepository, CommentRepository, UserRepository};
use crate::domain::value_object::{BlogId, CommentId};
use crate::error::ApiResult;
use crate::presentation::dto::{
    AuthenticateRequest, BlogCommentsResponse, BlogListResponse, BlogRequest, BlogView,
    CommentListResponse, CommentRequest, CommentView, Page, PageQuery, RegisterRequest,
    UserListResponse, UserView,
};
use crate::presentation::middleware::{CurrentUser, require_admin, require_user};

/// Shared handler state
pub struct BlogAppState<R> {
    pub repo: Arc<R>,
    pub config: Arc<WebConfig>,
}

impl<R> Clone for BlogAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

/// POST /api/users - register a new user and sign them in
pub async fn register_user<R>(
    State(state): State<BlogAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Response>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = RegisterUserUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.config));
    let output = use_case
        .execute(RegisterInput {
            name: req.name,
            email: req.email,
            passwd: req.passwd,
        })
        .await?;

    let cookie = state
        .config
        .cookie
        .build_set_cookie(&output.cookie_value, state.config.session_ttl_secs());

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(UserView::from(output.user)),
    )
        .into_response())
}

/// POST /api/authenticate - verify credentials and issue a session cookie
pub async fn authenticate<R>(
    State(state): State<BlogAppState<R>>,
    Json(req): Json<AuthenticateRequest>,
) -> ApiResult<Response>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.config));
    let output = use_case
        .execute(AuthenticateInput {
            email: req.email,
            passwd: req.passwd,
        })
        .await?;

    let cookie = state
        .config
        .cookie
        .build_set_cookie(&output.cookie_value, state.config.session_ttl_secs());

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(UserView::from(output.user)),
    )
        .into_response())
}

/// GET /signout - clear the session cookie and bounce back to the referrer
pub async fn signout<R>(
    State(state): State<BlogAppState<R>>,
    headers: HeaderMap,
) -> Response
where
    R: UserRepository + Send + Sync + 'static,
{
    let referer = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("/")
        .to_string();

    let cookie = state.config.cookie.build_delete_cookie();

    tracing::info!("user signed out");
    (
        StatusCode::SEE_OTHER,
        [(header::LOCATION, referer), (header::SET_COOKIE, cookie)],
    )
        .into_response()
}

/// GET /api/users - paged user listing (admin only)
pub async fn list_users<R>(
    State(state): State<BlogAppState<R>>,
    Extension(identity): Extension<CurrentUser>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<UserListResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    require_admin(&identity)?;

    let use_case = ListUsersUseCase::new(Arc::clone(&state.repo));
    let count = use_case.count().await?;
    let page = Page::new(count, query.page_index());

    let users = if page.is_empty() {
        Vec::new()
    } else {
        use_case.list(page.offset, page.limit).await?
    };

    Ok(Json(UserListResponse {
        page,
        users: users.into_iter().map(UserView::from).collect(),
    }))
}

/// GET /api/blogs - paged blog listing (public)
pub async fn list_blogs<R>(
    State(state): State<BlogAppState<R>>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<BlogListResponse>>
where
    R: BlogRepository + Send + Sync + 'static,
{
    let use_case = BlogsUseCase::new(Arc::clone(&state.repo));
    let count = use_case.count().await?;
    let page = Page::new(count, query.page_index());

    let blogs = if page.is_empty() {
        Vec::new()
    } else {
        use_case.list(page.offset, page.limit).await?
    };

    Ok(Json(BlogListResponse {
        page,
        blogs: blogs.into_iter().map(BlogView::from).collect(),
    }))
}

/// GET /api/blogs/{id} - fetch one blog (public)
pub async fn get_blog<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<String>,
) -> ApiResult<Json<BlogView>>
where
    R: BlogRepository + Send + Sync + 'static,
{
    let use_case = BlogsUseCase::new(Arc::clone(&state.repo));
    let blog = use_case.get(&BlogId::from_string(id)).await?;
    Ok(Json(BlogView::from(blog)))
}

/// POST /api/blogs - create a blog (admin only)
pub async fn create_blog<R>(
    State(state): State<BlogAppState<R>>,
    Extension(identity): Extension<CurrentUser>,
    Json(req): Json<BlogRequest>,
) -> ApiResult<Json<BlogView>>
where
    R: BlogRepository + Send + Sync + 'static,
{
    require_admin(&identity)?;
    let author = require_user(&identity)?;

    let use_case = BlogsUseCase::new(Arc::clone(&state.repo));
    let blog = use_case
        .create(
            author,
            BlogInput {
                name: req.name,
                summary: req.summary,
                content: req.content,
            },
        )
        .await?;

    Ok(Json(BlogView::from(blog)))
}

/// POST /api/blogs/{id} - update a blog (admin only)
pub async fn update_blog<R>(
    State(state): State<BlogAppState<R>>,
    Extension(identity): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(req): Json<BlogRequest>,
) -> ApiResult<Json<BlogView>>
where
    R: BlogRepository + Send + Sync + 'static,
{
    require_admin(&identity)?;

    let use_case = BlogsUseCase::new(Arc::clone(&state.repo));
    let blog = use_case
        .update(
            &BlogId::from_string(id),
            BlogInput {
                name: req.name,
                summary: req.summary,
                content: req.content,
            },
        )
        .await?;

    Ok(Json(BlogView::from(blog)))
}

/// POST /api/blogs/{id}/delete - delete a blog (admin only)
pub async fn delete_blog<R>(
    State(state): State<BlogAppState<R>>,
    Extension(identity): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>>
where
    R: BlogRepository + Send + Sync + 'static,
{
    require_admin(&identity)?;

    let blog_id = BlogId::from_string(id);
    let use_case = BlogsUseCase::new(Arc::clone(&state.repo));
    use_case.delete(&blog_id).await?;

    Ok(Json(serde_json::json!({ "id": blog_id.into_string() })))
}

/// GET /api/blogs/{id}/comments - comments on one blog (public)
pub async fn list_blog_comments<R>(
    State(state): State<BlogAppState<R>>,
    Path(id): Path<String>,
) -> ApiResult<Json<BlogCommentsResponse>>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    let use_case = CommentsUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.repo));
    let comments = use_case.list_for_blog(&BlogId::from_string(id)).await?;

    Ok(Json(BlogCommentsResponse {
        comments: comments.into_iter().map(CommentView::from).collect(),
    }))
}

/// POST /api/blogs/{id}/comments - comment on a blog (any signed-in user)
pub async fn create_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(identity): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(req): Json<CommentRequest>,
) -> ApiResult<Json<CommentView>>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    let author = require_user(&identity)?;

    let use_case = CommentsUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.repo));
    let comment = use_case
        .create(BlogId::from_string(id), author, req.content)
        .await?;

    Ok(Json(CommentView::from(comment)))
}

/// GET /api/comments - paged listing of all comments (admin only)
pub async fn list_comments<R>(
    State(state): State<BlogAppState<R>>,
    Extension(identity): Extension<CurrentUser>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<CommentListResponse>>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    require_admin(&identity)?;

    let use_case = CommentsUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.repo));
    let count = use_case.count().await?;
    let page = Page::new(count, query.page_index());

    let comments = if page.is_empty() {
        Vec::new()
    } else {
        use_case.list(page.offset, page.limit).await?
    };

    Ok(Json(CommentListResponse {
        page,
        comments: comments.into_iter().map(CommentView::from).collect(),
    }))
}

/// POST /api/comments/{id}/delete - delete a comment (admin only)
pub async fn delete_comment<R>(
    State(state): State<BlogAppState<R>>,
    Extension(identity): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>>
where
    R: BlogRepository + CommentRepository + Send + Sync + 'static,
{
    require_admin(&identity)?;

    let comment_id = CommentId::from_string(id);
    let use_case = CommentsUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.repo));
    use_case.delete(&comment_id).await?;

    Ok(Json(serde_json::json!({ "id": comment_id.into_string() })))
}
