// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, profiles::ProfileCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        queries::{
            articles::{ArticleQueryService, ArticleViewAssembler},
            profiles::ProfileQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        article::{
            ArticleReadRepository, ArticleWriteRepository, FavoriteRepository,
            services::ArticleSlugService,
        },
        profile::FollowRepository,
        user::UserRepository,
    },
};

/// Every store and adapter the services are built from.
pub struct ServiceDependencies {
    pub user_repo: Arc<dyn UserRepository>,
    pub article_write_repo: Arc<dyn ArticleWriteRepository>,
    pub article_read_repo: Arc<dyn ArticleReadRepository>,
    pub favorite_repo: Arc<dyn FavoriteRepository>,
    pub follow_repo: Arc<dyn FollowRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
    pub slugger: Arc<dyn SlugGenerator>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub profile_commands: Arc<ProfileCommandService>,
    pub profile_queries: Arc<ProfileQueryService>,
    token_manager: Arc<dyn TokenManager>,
    user_repo: Arc<dyn UserRepository>,
}

impl ApplicationServices {
    pub fn new(deps: ServiceDependencies) -> Self {
        let ServiceDependencies {
            user_repo,
            article_write_repo,
            article_read_repo,
            favorite_repo,
            follow_repo,
            password_hasher,
            token_manager,
            clock,
            slugger,
        } = deps;

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&token_manager),
        ));

        let assembler = Arc::new(ArticleViewAssembler::new(
            Arc::clone(&favorite_repo),
            Arc::clone(&follow_repo),
        ));
        let slug_service = Arc::new(ArticleSlugService::new(slugger));

        let article_commands = Arc::new(ArticleCommandService::new(
            article_write_repo,
            Arc::clone(&article_read_repo),
            Arc::clone(&favorite_repo),
            slug_service,
            Arc::clone(&assembler),
            clock,
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            article_read_repo,
            Arc::clone(&user_repo),
            favorite_repo,
            assembler,
        ));

        let profile_commands = Arc::new(ProfileCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&follow_repo),
        ));
        let profile_queries = Arc::new(ProfileQueryService::new(
            Arc::clone(&user_repo),
            follow_repo,
        ));

        Self {
            user_commands,
            user_queries,
            article_commands,
            article_queries,
            profile_commands,
            profile_queries,
            token_manager,
            user_repo,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Resolve a raw token into the caller's identity. The account is
    /// reloaded, so a token outliving its user is rejected and renamed
    /// users are seen with their current username and email.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let claimed = self.token_manager.authenticate(token).await?;
        let user = self
            .user_repo
            .find_by_id(claimed.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("token subject no longer exists"))?;

        Ok(AuthenticatedUser {
            id: user.id,
            username: user.username.to_string(),
            email: user.email.to_string(),
        })
    }
}
