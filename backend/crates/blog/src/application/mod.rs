//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod blogs;
pub mod comments;
pub mod config;
pub mod register;
pub mod session;
pub mod users;

// Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateOutput, AuthenticateUseCase};
pub use blogs::{BlogInput, BlogsUseCase};
pub use comments::CommentsUseCase;
pub use config::WebConfig;
pub use register::{RegisterInput, RegisterOutput, RegisterUserUseCase};
pub use session::SessionCodec;
pub use users::ListUsersUseCase;
