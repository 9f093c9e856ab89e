use crate::domain::article::AuthoredArticle;
use crate::domain::profile::Profile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ProfileDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: ProfileDto,
}

impl ArticleDto {
    /// `favorited` and `following` are relative to the viewer; anonymous
    /// viewers get `false` for both.
    pub fn from_parts(authored: AuthoredArticle, favorited: bool, following: bool) -> Self {
        let AuthoredArticle { article, author } = authored;
        Self {
            slug: article.slug.into_inner(),
            title: article.title.into_inner(),
            description: article.description.into_inner(),
            body: article.body.into_inner(),
            tag_list: article.tag_list.into_inner(),
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited,
            favorites_count: article.favorites_count,
            author: Profile::new(author, following).into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListDto {
    pub articles: Vec<ArticleDto>,
    /// Count of all stored articles; listing filters do not narrow it.
    pub articles_count: u64,
}
