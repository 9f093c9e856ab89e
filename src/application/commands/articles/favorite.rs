use super::ArticleCommandService;
use crate::application::{
    dto::{ArticleDto, AuthenticatedUser},
    error::ApplicationResult,
};
use crate::domain::article::AuthoredArticle;

pub struct FavoriteArticleCommand {
    pub slug: String,
}

pub struct UnfavoriteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    /// Idempotent: favoriting twice leaves a single edge and counts it once.
    pub async fn favorite_article(
        &self,
        actor: &AuthenticatedUser,
        command: FavoriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let authored = self.load_by_slug(command.slug).await?;
        let article = self
            .favorite_repo
            .add(actor.id, authored.article.id)
            .await?;
        tracing::debug!(
            slug = %article.slug,
            user_id = %actor.id,
            favorites_count = article.favorites_count,
            "article favorited"
        );

        let refreshed = AuthoredArticle {
            article,
            author: authored.author,
        };
        self.assembler.present_one(Some(actor), refreshed).await
    }

    /// Idempotent: removing an absent favorite changes nothing.
    pub async fn unfavorite_article(
        &self,
        actor: &AuthenticatedUser,
        command: UnfavoriteArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let authored = self.load_by_slug(command.slug).await?;
        let article = self
            .favorite_repo
            .remove(actor.id, authored.article.id)
            .await?;
        tracing::debug!(
            slug = %article.slug,
            user_id = %actor.id,
            favorites_count = article.favorites_count,
            "article unfavorited"
        );

        let refreshed = AuthoredArticle {
            article,
            author: authored.author,
        };
        self.assembler.present_one(Some(actor), refreshed).await
    }
}
