pub mod entity;
pub mod repository;

pub use entity::{FollowEdge, Profile};
pub use repository::FollowRepository;
