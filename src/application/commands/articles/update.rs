use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleBody, ArticleDescription, ArticleTitle, ArticleUpdate, AuthoredArticle, TagList,
        specifications::{ArticleSpecification, CanModifyArticleSpec},
    },
};

/// Absent fields are left untouched. The slug is never regenerated, so links
/// to the article survive a title change.
#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub slug: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
    pub tag_list: Option<Vec<String>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            slug,
            title,
            description,
            body,
            tag_list,
        } = command;

        let authored = self.load_by_slug(slug).await?;

        if !CanModifyArticleSpec::new(&authored.article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden("you are not the author"));
        }

        let mut update = ArticleUpdate::new(authored.article.id, self.clock.now());
        let mut changed = false;

        if let Some(title) = title {
            update = update.with_title(ArticleTitle::new(title)?);
            changed = true;
        }
        if let Some(description) = description {
            update = update.with_description(ArticleDescription::new(description)?);
            changed = true;
        }
        if let Some(body) = body {
            update = update.with_body(ArticleBody::new(body)?);
            changed = true;
        }
        if let Some(tags) = tag_list {
            update = update.with_tag_list(TagList::new(tags)?);
            changed = true;
        }

        if !changed {
            return self.assembler.present_one(Some(actor), authored).await;
        }

        let article = self.write_repo.update(update).await?;
        let updated = AuthoredArticle {
            article,
            author: authored.author,
        };
        self.assembler.present_one(Some(actor), updated).await
    }
}
