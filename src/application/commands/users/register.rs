use super::{UserCommandService, password::validate_password, service::issue_user_dto};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        self.ensure_identity_available(&email, &username).await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let new_user = NewUser::new(email, username, password_hash, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;

        tracing::info!(user_id = %user.id, username = %user.username, "user registered");
        issue_user_dto(self.token_manager.as_ref(), user).await
    }

    async fn ensure_identity_available(
        &self,
        email: &Email,
        username: &Username,
    ) -> ApplicationResult<()> {
        let email_taken = self.user_repo.find_by_email(email).await?.is_some();
        let username_taken = self.user_repo.find_by_username(username).await?.is_some();
        if email_taken || username_taken {
            return Err(ApplicationError::unprocessable(
                "email or username are taken",
            ));
        }
        Ok(())
    }
}
