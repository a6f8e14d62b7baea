//! Value Objects

pub mod email;
pub mod password_digest;
pub mod user_id;
pub mod user_name;

pub use email::Email;
pub use password_digest::{PASSWD_MASK, PasswordDigest};
pub use user_id::{BlogId, CommentId, UserId};
pub use user_name::UserName;
