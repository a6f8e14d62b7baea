//! Blog Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, identity middleware, router
//!
//! ## Features
//! - User registration/authentication with email + client-side SHA-1 digest
//! - Stateless self-signed session cookies (no server-side session store)
//! - Blogs and comments with admin-gated management endpoints
//!
//! ## Security Model
//! - Stored credential is `sha1(user_id + ":" + client_digest)`, never raw
//! - Cookie is `uid-expires-signature`, verified in constant time
//! - Changing a password invalidates every outstanding cookie for that user
//! - Unreadable cookies degrade to an anonymous identity, never an error

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::WebConfig;
pub use error::{ApiError, ApiResult};
pub use infra::postgres::PgBlogRepository;
pub use presentation::router::{blog_router, blog_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgBlogRepository as BlogStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
