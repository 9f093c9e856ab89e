use crate::domain::article::entity::{
    Article, ArticleListFilter, ArticleUpdate, AuthoredArticle, NewArticle,
};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<AuthoredArticle>>;
    /// Number of stored articles, ignoring every filter.
    async fn count_all(&self) -> DomainResult<u64>;
    /// Newest first, filtered and paged as described by `filter`.
    async fn list(&self, filter: &ArticleListFilter) -> DomainResult<Vec<AuthoredArticle>>;
    /// Distinct tags across all articles, sorted ascending.
    async fn list_tags(&self) -> DomainResult<Vec<String>>;
}

/// The user ↔ article favorites relation. Implementations must keep
/// `Article::favorites_count` equal to the number of edges pointing at the
/// article, changing both in one atomic unit.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Insert the edge if missing and bump the counter. Returns the article
    /// as stored afterwards.
    async fn add(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<Article>;
    /// Delete the edge if present and drop the counter.
    async fn remove(&self, user_id: UserId, article_id: ArticleId) -> DomainResult<Article>;
    async fn favorite_article_ids(&self, user_id: UserId) -> DomainResult<Vec<ArticleId>>;
}
