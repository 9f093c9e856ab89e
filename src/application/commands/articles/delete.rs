use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::specifications::{ArticleSpecification, CanModifyArticleSpec},
};

pub struct DeleteArticleCommand {
    pub slug: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let authored = self.load_by_slug(command.slug).await?;

        if !CanModifyArticleSpec::new(&authored.article, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden("you are not the author"));
        }

        self.write_repo.delete(authored.article.id).await?;
        tracing::info!(slug = %authored.article.slug, author_id = %actor.id, "article deleted");
        Ok(())
    }
}
