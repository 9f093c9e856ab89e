use super::ProfileCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::ApplicationResult,
    },
    domain::profile::{FollowEdge, Profile},
};

pub struct FollowUserCommand {
    pub username: String,
}

pub struct UnfollowUserCommand {
    pub username: String,
}

impl ProfileCommandService {
    /// Following an already-followed user is a no-op that still reports
    /// `following: true`.
    pub async fn follow(
        &self,
        actor: &AuthenticatedUser,
        command: FollowUserCommand,
    ) -> ApplicationResult<ProfileDto> {
        let target = self.load_target(command.username).await?;
        let edge = FollowEdge::new(actor.id, target.id)?;

        self.follow_repo.insert(edge).await?;
        tracing::debug!(follower_id = %actor.id, following_id = %target.id, "user followed");

        Ok(Profile::new(target.summary(), true).into())
    }

    pub async fn unfollow(
        &self,
        actor: &AuthenticatedUser,
        command: UnfollowUserCommand,
    ) -> ApplicationResult<ProfileDto> {
        let target = self.load_target(command.username).await?;
        let edge = FollowEdge::new(actor.id, target.id)?;

        self.follow_repo.delete(edge).await?;
        tracing::debug!(follower_id = %actor.id, following_id = %target.id, "user unfollowed");

        Ok(Profile::new(target.summary(), false).into())
    }
}
