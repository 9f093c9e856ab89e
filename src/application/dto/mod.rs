pub mod articles;
pub mod auth;
pub mod serde_time;
pub mod users;

pub use articles::{ArticleDto, ArticleListDto};
pub use auth::{AuthenticatedUser, TokenSubject};
pub use users::{ProfileDto, UserDto};
