//! Presentation Layer
//!
//! HTTP handlers, DTOs, identity middleware, and routing.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

// Re-exports
pub use handlers::BlogAppState;
pub use middleware::{CurrentUser, require_admin, require_user};
pub use router::{blog_router, blog_router_generic};
