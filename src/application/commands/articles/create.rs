// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{
        ArticleBody, ArticleDescription, ArticleTitle, NewArticle, TagList,
    },
};

#[derive(Debug, Default)]
pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let description = ArticleDescription::new(command.description)?;
        let body = ArticleBody::new(command.body)?;
        let tag_list = TagList::new(command.tag_list)?;

        let slug = self.slug_service.generate(&title)?;

        let new_article = NewArticle {
            slug,
            title,
            description,
            body,
            tag_list,
            author_id: actor.id,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(slug = %created.slug, author_id = %actor.id, "article created");

        let authored = self.load_by_slug(created.slug.into_inner()).await?;
        self.assembler.present_one(Some(actor), authored).await
    }
}
