// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleDescription, ArticleId, ArticleListFilter, ArticleReadRepository,
    ArticleSlug, ArticleTitle, ArticleUpdate, ArticleWriteRepository, AuthoredArticle, NewArticle,
    TagList,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{UserId, UserSummary, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

pub(super) const ARTICLE_COLUMNS: &str = "id, slug, title, description, body, tag_list, \
     favorites_count, author_id, created_at, updated_at";

const AUTHORED_SELECT: &str = "SELECT a.id, a.slug, a.title, a.description, a.body, a.tag_list, \
     a.favorites_count, a.author_id, a.created_at, a.updated_at, \
     u.username AS author_username, u.bio AS author_bio, u.image AS author_image \
     FROM articles a JOIN users u ON u.id = a.author_id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct ArticleRow {
    id: i64,
    slug: String,
    title: String,
    description: String,
    body: String,
    tag_list: String,
    favorites_count: i64,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            slug: ArticleSlug::new(row.slug)?,
            title: ArticleTitle::new(row.title)?,
            description: ArticleDescription::new(row.description)?,
            body: ArticleBody::new(row.body)?,
            tag_list: TagList::from_stored(&row.tag_list),
            favorites_count: row.favorites_count,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct AuthoredArticleRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    author_username: String,
    author_bio: String,
    author_image: String,
}

impl TryFrom<AuthoredArticleRow> for AuthoredArticle {
    type Error = DomainError;

    fn try_from(row: AuthoredArticleRow) -> Result<Self, Self::Error> {
        let article = Article::try_from(row.article)?;
        let author = UserSummary {
            id: article.author_id,
            username: Username::new(row.author_username)?,
            bio: row.author_bio,
            image: row.author_image,
        };
        Ok(AuthoredArticle { article, author })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            slug,
            title,
            description,
            body,
            tag_list,
            author_id,
            created_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (slug, title, description, body, tag_list, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .bind(title.as_str())
            .bind(description.as_str())
            .bind(body.as_str())
            .bind(tag_list.to_stored())
            .bind(i64::from(author_id))
            .bind(created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            description,
            body,
            tag_list,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(String::from(description));
        }
        if let Some(body) = body {
            builder.push(", body = ");
            builder.push_bind(String::from(body));
        }
        if let Some(tags) = tag_list {
            builder.push(", tag_list = ");
            builder.push_bind(tags.to_stored());
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::not_found("article not found"))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a ArticleListFilter) {
        let mut has_where = false;
        let mut next_clause = |builder: &mut QueryBuilder<'a, Postgres>| {
            builder.push(if has_where { " AND " } else { " WHERE " });
            has_where = true;
        };

        if let Some(tag) = filter.tag.as_deref() {
            next_clause(builder);
            builder.push("position(");
            builder.push_bind(tag);
            builder.push(" in a.tag_list) > 0");
        }

        if let Some(author_id) = filter.author_id {
            next_clause(builder);
            builder.push("a.author_id = ");
            builder.push_bind(i64::from(author_id));
        }

        if let Some(ids) = &filter.article_ids {
            next_clause(builder);
            builder.push("a.id = ANY(");
            builder.push_bind(ids.iter().copied().map(i64::from).collect::<Vec<_>>());
            builder.push(")");
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<AuthoredArticle>> {
        let sql = format!("{AUTHORED_SELECT} WHERE a.slug = $1");
        let row = sqlx::query_as::<_, AuthoredArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(AuthoredArticle::try_from).transpose()
    }

    async fn count_all(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM articles")
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn list(&self, filter: &ArticleListFilter) -> DomainResult<Vec<AuthoredArticle>> {
        if filter.matches_nothing() {
            return Ok(Vec::new());
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(AUTHORED_SELECT);
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY a.created_at DESC, a.id DESC");

        if let Some(limit) = filter.limit {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
        }
        if let Some(offset) = filter.offset {
            builder.push(" OFFSET ");
            builder.push_bind(i64::from(offset));
        }

        let rows = builder
            .build_query_as::<AuthoredArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(AuthoredArticle::try_from).collect()
    }

    async fn list_tags(&self) -> DomainResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT tag FROM (
                 SELECT unnest(string_to_array(tag_list, ',')) AS tag FROM articles
             ) tags
             WHERE tag <> ''
             ORDER BY tag ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
