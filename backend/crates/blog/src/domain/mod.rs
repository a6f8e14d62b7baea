//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{Blog, Comment, User};
pub use repository::{BlogRepository, CommentRepository, UserRepository};
