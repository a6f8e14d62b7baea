//! Router Configuration

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Router, middleware};

use crate::application::config::WebConfig;
use crate::domain::repository::{BlogRepository, CommentRepository, UserRepository};
use crate::infra::postgres::PgBlogRepository;
use crate::presentation::handlers::{self, BlogAppState};
use crate::presentation::middleware::{IdentityState, resolve_identity};

/// Create the blog router backed by Postgres.
pub fn blog_router(repo: PgBlogRepository, config: WebConfig) -> Router {
    blog_router_generic(repo, config)
}

/// Create the blog router over any repository implementation.
///
/// Every route runs behind the identity middleware, so handlers can always
/// read a `CurrentUser` extension.
pub fn blog_router_generic<R>(repo: R, config: WebConfig) -> Router
where
    R: UserRepository + BlogRepository + CommentRepository + Send + Sync + 'static,
{
    let repo = Arc::new(repo);
    let config = Arc::new(config);

    let state = BlogAppState {
        repo: Arc::clone(&repo),
        config: Arc::clone(&config),
    };
    let identity_state = IdentityState { repo, config };

    Router::new()
        .route(
            "/api/users",
            post(handlers::register_user::<R>).get(handlers::list_users::<R>),
        )
        .route("/api/authenticate", post(handlers::authenticate::<R>))
        .route("/signout", get(handlers::signout::<R>))
        .route(
            "/api/blogs",
            get(handlers::list_blogs::<R>).post(handlers::create_blog::<R>),
        )
        .route(
            "/api/blogs/{id}",
            get(handlers::get_blog::<R>).post(handlers::update_blog::<R>),
        )
        .route("/api/blogs/{id}/delete", post(handlers::delete_blog::<R>))
        .route(
            "/api/blogs/{id}/comments",
            get(handlers::list_blog_comments::<R>).post(handlers::create_comment::<R>),
        )
        .route("/api/comments", get(handlers::list_comments::<R>))
        .route(
            "/api/comments/{id}/delete",
            post(handlers::delete_comment::<R>),
        )
        .layer(middleware::from_fn_with_state(
            identity_state,
            resolve_identity::<R>,
        ))
        .with_state(state)
}
