use crate::domain::profile::Profile;
use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The authenticated user's own view, carrying a fresh token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: String,
    pub image: String,
}

impl UserDto {
    pub fn from_parts(user: User, token: String) -> Self {
        Self {
            email: user.email.into(),
            token,
            username: user.username.into(),
            bio: user.bio,
            image: user.image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub username: String,
    pub bio: String,
    pub image: String,
    pub following: bool,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            username: profile.user.username.into(),
            bio: profile.user.bio,
            image: profile.user.image,
            following: profile.following,
        }
    }
}
