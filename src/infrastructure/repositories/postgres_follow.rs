use super::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::profile::{FollowEdge, FollowRepository};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashSet;

#[derive(Clone)]
pub struct PostgresFollowRepository {
    pool: PgPool,
}

impl PostgresFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn exists(&self, edge: FollowEdge) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE follower_id = $1 AND following_id = $2)",
        )
        .bind(i64::from(edge.follower_id()))
        .bind(i64::from(edge.following_id()))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn insert(&self, edge: FollowEdge) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO follows (follower_id, following_id) VALUES ($1, $2)
             ON CONFLICT (follower_id, following_id) DO NOTHING",
        )
        .bind(i64::from(edge.follower_id()))
        .bind(i64::from(edge.following_id()))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn delete(&self, edge: FollowEdge) -> DomainResult<()> {
        sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND following_id = $2")
            .bind(i64::from(edge.follower_id()))
            .bind(i64::from(edge.following_id()))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn following_ids(&self, follower_id: UserId) -> DomainResult<HashSet<UserId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT following_id FROM follows WHERE follower_id = $1",
        )
        .bind(i64::from(follower_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(UserId::new).collect()
    }
}
