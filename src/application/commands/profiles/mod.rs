mod follow;
mod service;

pub use follow::{FollowUserCommand, UnfollowUserCommand};
pub use service::ProfileCommandService;
