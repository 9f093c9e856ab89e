use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleListDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::ArticleListFilter,
        user::{User, Username},
    },
};

#[derive(Debug, Default, Clone)]
pub struct ListArticlesQuery {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ArticleQueryService {
    /// `articles_count` is the size of the whole collection, taken before any
    /// filter applies; it is not the number of matching rows.
    pub async fn list_articles(
        &self,
        viewer: Option<&AuthenticatedUser>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ArticleListDto> {
        let articles_count = self.read_repo.count_all().await?;

        let Some(filter) = self.resolve_filter(query).await? else {
            return Ok(ArticleListDto {
                articles: Vec::new(),
                articles_count,
            });
        };

        let rows = self.read_repo.list(&filter).await?;
        let articles = self.assembler.present_many(viewer, rows).await?;

        Ok(ArticleListDto {
            articles,
            articles_count,
        })
    }

    /// `None` when a username filter cannot match anything: the named author
    /// does not exist, or the named user has no favorites.
    async fn resolve_filter(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Option<ArticleListFilter>> {
        let mut filter = ArticleListFilter {
            tag: non_blank(query.tag),
            limit: query.limit,
            offset: query.offset,
            ..Default::default()
        };

        if let Some(author) = non_blank(query.author) {
            let Some(user) = self.find_user(author).await? else {
                return Ok(None);
            };
            filter.author_id = Some(user.id);
        }

        if let Some(favorited) = non_blank(query.favorited) {
            let Some(user) = self.find_user(favorited).await? else {
                return Ok(None);
            };
            let ids = self.favorite_repo.favorite_article_ids(user.id).await?;
            if ids.is_empty() {
                return Ok(None);
            }
            filter.article_ids = Some(ids);
        }

        Ok(Some(filter))
    }

    async fn find_user(&self, username: String) -> ApplicationResult<Option<User>> {
        match Username::new(username) {
            Ok(username) => Ok(self.user_repo.find_by_username(&username).await?),
            Err(_) => Ok(None),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
