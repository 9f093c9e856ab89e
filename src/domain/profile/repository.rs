use crate::domain::errors::DomainResult;
use crate::domain::profile::entity::FollowEdge;
use crate::domain::user::UserId;
use async_trait::async_trait;
use std::collections::HashSet;

#[async_trait]
pub trait FollowRepository: Send + Sync {
    async fn exists(&self, edge: FollowEdge) -> DomainResult<bool>;
    /// Create the edge unless it is already present.
    async fn insert(&self, edge: FollowEdge) -> DomainResult<()>;
    /// Remove the edge; absent edges are not an error.
    async fn delete(&self, edge: FollowEdge) -> DomainResult<()>;
    /// Every user `follower_id` follows.
    async fn following_ids(&self, follower_id: UserId) -> DomainResult<HashSet<UserId>>;
}
