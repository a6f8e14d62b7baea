use kernel::id::Id;

pub struct UserMarker;
pub type UserId = Id<UserMarker>;

pub struct BlogMarker;
pub type BlogId = Id<BlogMarker>;

pub struct CommentMarker;
pub type CommentId = Id<CommentMarker>;
