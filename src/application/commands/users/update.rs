use super::{UserCommandService, password::validate_password, service::issue_user_dto};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, PasswordHash, User, UserId, UserUpdate, Username},
};

#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let mut update = UserUpdate::new(actor.id);

        if let Some(email) = command.email {
            let email = Email::new(email)?;
            let owner = self.user_repo.find_by_email(&email).await?;
            ensure_not_owned_by_other(owner.as_ref(), actor.id, "email is taken")?;
            update = update.with_email(email);
        }

        if let Some(username) = command.username {
            let username = Username::new(username)?;
            let owner = self.user_repo.find_by_username(&username).await?;
            ensure_not_owned_by_other(owner.as_ref(), actor.id, "username is taken")?;
            update = update.with_username(username);
        }

        if let Some(password) = command.password {
            validate_password(&password)?;
            let hashed = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hashed)?);
        }

        if let Some(bio) = command.bio {
            update = update.with_bio(bio);
        }

        if let Some(image) = command.image {
            update = update.with_image(image);
        }

        let user = if update.is_empty() {
            self.user_repo
                .find_by_id(actor.id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("user not found"))?
        } else {
            self.user_repo.update(update).await?
        };

        issue_user_dto(self.token_manager.as_ref(), user).await
    }
}

fn ensure_not_owned_by_other(
    owner: Option<&User>,
    actor_id: UserId,
    message: &str,
) -> ApplicationResult<()> {
    match owner {
        Some(user) if user.id != actor_id => Err(ApplicationError::unprocessable(message)),
        _ => Ok(()),
    }
}
