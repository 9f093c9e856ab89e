use std::sync::Arc;

use crate::application::{
    ApplicationResult,
    dto::{TokenSubject, UserDto},
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
};
use crate::domain::user::{User, UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }
}

/// Every user-facing response carries a freshly signed token.
pub(crate) async fn issue_user_dto(
    token_manager: &dyn TokenManager,
    user: User,
) -> ApplicationResult<UserDto> {
    let token = token_manager.issue(TokenSubject::from(&user)).await?;
    Ok(UserDto::from_parts(user, token))
}
