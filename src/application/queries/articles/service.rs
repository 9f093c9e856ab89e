use std::sync::Arc;

use super::ArticleViewAssembler;
use crate::domain::{
    article::{ArticleReadRepository, FavoriteRepository},
    user::UserRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) favorite_repo: Arc<dyn FavoriteRepository>,
    pub(super) assembler: Arc<ArticleViewAssembler>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        assembler: Arc<ArticleViewAssembler>,
    ) -> Self {
        Self {
            read_repo,
            user_repo,
            favorite_repo,
            assembler,
        }
    }
}
