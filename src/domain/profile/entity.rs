use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{UserId, UserSummary};

/// Directed "follower follows following" relation. Self-loops are not
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FollowEdge {
    follower_id: UserId,
    following_id: UserId,
}

impl FollowEdge {
    pub fn new(follower_id: UserId, following_id: UserId) -> DomainResult<Self> {
        if follower_id == following_id {
            return Err(DomainError::Validation(
                "follower and following cannot be equal".into(),
            ));
        }
        Ok(Self {
            follower_id,
            following_id,
        })
    }

    pub fn follower_id(&self) -> UserId {
        self.follower_id
    }

    pub fn following_id(&self) -> UserId {
        self.following_id
    }
}

/// A user as seen by a particular viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub user: UserSummary,
    pub following: bool,
}

impl Profile {
    pub fn new(user: UserSummary, following: bool) -> Self {
        Self { user, following }
    }
}
