//! Entities

pub mod blog;
pub mod comment;
pub mod user;

pub use blog::Blog;
pub use comment::Comment;
pub use user::User;
