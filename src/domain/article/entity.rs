// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle, TagList,
};
use crate::domain::user::{UserId, UserSummary};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub tag_list: TagList,
    pub favorites_count: i64,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

/// An article joined with its author's public profile.
#[derive(Debug, Clone)]
pub struct AuthoredArticle {
    pub article: Article,
    pub author: UserSummary,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub slug: ArticleSlug,
    pub title: ArticleTitle,
    pub description: ArticleDescription,
    pub body: ArticleBody,
    pub tag_list: TagList,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub description: Option<ArticleDescription>,
    pub body: Option<ArticleBody>,
    pub tag_list: Option<TagList>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            description: None,
            body: None,
            tag_list: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_description(mut self, description: ArticleDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_body(mut self, body: ArticleBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_tag_list(mut self, tag_list: TagList) -> Self {
        self.tag_list = Some(tag_list);
        self
    }
}

/// Resolved listing filter. Username lookups have already happened; an
/// `article_ids` of `Some(vec![])` matches nothing.
#[derive(Debug, Clone, Default)]
pub struct ArticleListFilter {
    pub tag: Option<String>,
    pub author_id: Option<UserId>,
    pub article_ids: Option<Vec<ArticleId>>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl ArticleListFilter {
    pub fn matches_nothing(&self) -> bool {
        self.article_ids.as_ref().is_some_and(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        let now = Utc::now();
        Article {
            id: ArticleId::new(1).unwrap(),
            slug: ArticleSlug::new("how-to-train-your-dragon_0a1b2c").unwrap(),
            title: ArticleTitle::new("How to train your dragon").unwrap(),
            description: ArticleDescription::new("Ever wonder how?").unwrap(),
            body: ArticleBody::new("You have to believe").unwrap(),
            tag_list: TagList::new(["dragons", "training"]).unwrap(),
            favorites_count: 0,
            author_id: UserId::new(7).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn update_builder_collects_only_given_fields() {
        let article = sample_article();
        let later = article.updated_at + chrono::Duration::seconds(5);
        let update = ArticleUpdate::new(article.id, later)
            .with_body(ArticleBody::new("With two hands").unwrap());

        assert_eq!(update.body.as_ref().map(ArticleBody::as_str), Some("With two hands"));
        assert!(update.title.is_none());
        assert!(update.tag_list.is_none());
        assert_eq!(update.updated_at, later);
    }

    #[test]
    fn empty_id_set_matches_nothing() {
        let filter = ArticleListFilter {
            article_ids: Some(vec![]),
            ..Default::default()
        };
        assert!(filter.matches_nothing());
        assert!(!ArticleListFilter::default().matches_nothing());
    }

    #[test]
    fn authorship_is_by_id() {
        let article = sample_article();
        assert!(article.is_authored_by(UserId::new(7).unwrap()));
        assert!(!article.is_authored_by(UserId::new(8).unwrap()));
    }
}
