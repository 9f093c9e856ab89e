use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleId, AuthoredArticle, FavoriteRepository},
        profile::FollowRepository,
        user::UserId,
    },
};

/// What a viewer has favorited and whom they follow, loaded once per request.
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    favorites: HashSet<ArticleId>,
    following: HashSet<UserId>,
}

impl ViewerState {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn new(favorites: HashSet<ArticleId>, following: HashSet<UserId>) -> Self {
        Self {
            favorites,
            following,
        }
    }

    pub fn present(&self, authored: AuthoredArticle) -> ArticleDto {
        let favorited = self.favorites.contains(&authored.article.id);
        let following = self.following.contains(&authored.author.id);
        ArticleDto::from_parts(authored, favorited, following)
    }
}

/// Turns stored articles into viewer-relative views.
pub struct ArticleViewAssembler {
    favorite_repo: Arc<dyn FavoriteRepository>,
    follow_repo: Arc<dyn FollowRepository>,
}

impl ArticleViewAssembler {
    pub fn new(
        favorite_repo: Arc<dyn FavoriteRepository>,
        follow_repo: Arc<dyn FollowRepository>,
    ) -> Self {
        Self {
            favorite_repo,
            follow_repo,
        }
    }

    /// Anonymous viewers cost no store round-trips.
    pub async fn viewer_state(
        &self,
        viewer: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<ViewerState> {
        let Some(viewer) = viewer else {
            return Ok(ViewerState::anonymous());
        };

        let favorites = self
            .favorite_repo
            .favorite_article_ids(viewer.id)
            .await?
            .into_iter()
            .collect();
        let following = self.follow_repo.following_ids(viewer.id).await?;
        Ok(ViewerState::new(favorites, following))
    }

    pub async fn present_one(
        &self,
        viewer: Option<&AuthenticatedUser>,
        authored: AuthoredArticle,
    ) -> ApplicationResult<ArticleDto> {
        Ok(self.viewer_state(viewer).await?.present(authored))
    }

    pub async fn present_many(
        &self,
        viewer: Option<&AuthenticatedUser>,
        authored: Vec<AuthoredArticle>,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        if authored.is_empty() {
            return Ok(Vec::new());
        }
        let state = self.viewer_state(viewer).await?;
        Ok(authored.into_iter().map(|a| state.present(a)).collect())
    }
}
