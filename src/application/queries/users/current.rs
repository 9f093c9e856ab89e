use super::UserQueryService;
use crate::application::{
    commands::users::issue_user_dto,
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// Reload the token's user; the token alone may be stale after an update.
    pub async fn current_user(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        issue_user_dto(self.token_manager.as_ref(), user).await
    }
}
