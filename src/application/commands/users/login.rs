use super::{UserCommandService, service::issue_user_dto};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

const INVALID_CREDENTIALS: &str = "credentials are not valid";

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)
            .map_err(|_| ApplicationError::unprocessable(INVALID_CREDENTIALS))?;
        let user = self
            .find_and_authenticate_user(&email, &command.password)
            .await?;

        issue_user_dto(self.token_manager.as_ref(), user).await
    }

    async fn find_and_authenticate_user(
        &self,
        email: &Email,
        password: &str,
    ) -> ApplicationResult<User> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ApplicationError::unprocessable(INVALID_CREDENTIALS))?;

        let valid = self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;
        if !valid {
            tracing::debug!(user_id = %user.id, "login rejected: password mismatch");
            return Err(ApplicationError::unprocessable(INVALID_CREDENTIALS));
        }

        Ok(user)
    }
}
