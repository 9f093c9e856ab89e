pub mod article;
pub mod errors;
pub mod profile;
pub mod user;
