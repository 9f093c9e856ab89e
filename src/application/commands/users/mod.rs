mod login;
mod password;
mod register;
mod service;
mod update;

pub use login::LoginUserCommand;
pub use register::RegisterUserCommand;
pub(crate) use service::issue_user_dto;
pub use service::UserCommandService;
pub use update::UpdateUserCommand;
