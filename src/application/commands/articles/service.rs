// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
        queries::articles::ArticleViewAssembler,
    },
    domain::article::{
        ArticleReadRepository, ArticleSlug, ArticleWriteRepository, AuthoredArticle,
        FavoriteRepository, services::ArticleSlugService,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) favorite_repo: Arc<dyn FavoriteRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) assembler: Arc<ArticleViewAssembler>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        slug_service: Arc<ArticleSlugService>,
        assembler: Arc<ArticleViewAssembler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            favorite_repo,
            slug_service,
            assembler,
            clock,
        }
    }

    pub(super) async fn load_by_slug(&self, slug: String) -> ApplicationResult<AuthoredArticle> {
        let slug =
            ArticleSlug::new(slug).map_err(|_| ApplicationError::not_found("article not found"))?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
