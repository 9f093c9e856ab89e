pub mod articles;
pub mod profiles;
pub mod users;
