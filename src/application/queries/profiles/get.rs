use super::ProfileQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        profile::{FollowEdge, Profile},
        user::{User, Username},
    },
};

pub struct GetProfileQuery {
    pub username: String,
}

impl ProfileQueryService {
    /// Resolve a profile relative to `viewer`. Anonymous viewers and users
    /// looking at themselves always see `following: false`.
    pub async fn get_profile(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: GetProfileQuery,
    ) -> ApplicationResult<ProfileDto> {
        let username = Username::new(query.username)
            .map_err(|_| ApplicationError::not_found("profile not found"))?;
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;

        let following = self.is_following(viewer, &user).await?;
        Ok(Profile::new(user.summary(), following).into())
    }

    async fn is_following(
        &self,
        viewer: Option<&AuthenticatedUser>,
        user: &User,
    ) -> ApplicationResult<bool> {
        let Some(viewer) = viewer else {
            return Ok(false);
        };
        match FollowEdge::new(viewer.id, user.id) {
            Ok(edge) => Ok(self.follow_repo.exists(edge).await?),
            Err(_) => Ok(false),
        }
    }
}
