use super::map_sqlx;
use super::postgres_article::{ARTICLE_COLUMNS, ArticleRow};
use crate::domain::article::{Article, ArticleId, FavoriteRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

/// Favorites live in their own edge table; the counter on `articles` only
/// moves when an edge was actually created or removed, inside the same
/// transaction.
#[derive(Clone)]
pub struct PostgresFavoriteRepository {
    pool: PgPool,
}

impl PostgresFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn finish(
        mut tx: Transaction<'_, Postgres>,
        article_id: ArticleId,
        delta: i64,
    ) -> DomainResult<Article> {
        let fetched = if delta == 0 {
            let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
            sqlx::query_as::<_, ArticleRow>(&sql)
                .bind(i64::from(article_id))
                .fetch_optional(&mut *tx)
                .await
        } else {
            let sql = format!(
                "UPDATE articles SET favorites_count = favorites_count + $2
                 WHERE id = $1
                 RETURNING {ARTICLE_COLUMNS}"
            );
            sqlx::query_as::<_, ArticleRow>(&sql)
                .bind(i64::from(article_id))
                .bind(delta)
                .fetch_optional(&mut *tx)
                .await
        };
        let row = fetched
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("article not found"))?;

        tx.commit().await.map_err(map_sqlx)?;
        Article::try_from(row)
    }
}

#[async_trait]
impl FavoriteRepository for PostgresFavoriteRepository {
    async fn add(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let inserted = sqlx::query(
            "INSERT INTO favorites (user_id, article_id) VALUES ($1, $2)
             ON CONFLICT (user_id, article_id) DO NOTHING",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(article_id))
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .rows_affected();

        Self::finish(tx, article_id, inserted as i64).await
    }

    async fn remove(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let deleted = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND article_id = $2")
            .bind(i64::from(user_id))
            .bind(i64::from(article_id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .rows_affected();

        Self::finish(tx, article_id, -(deleted as i64)).await
    }

    async fn favorite_article_ids(&self, user_id: UserId) -> DomainResult<Vec<ArticleId>> {
        let ids = sqlx::query_scalar::<_, i64>(
            "SELECT article_id FROM favorites WHERE user_id = $1 ORDER BY article_id",
        )
        .bind(i64::from(user_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(ArticleId::new).collect()
    }
}
