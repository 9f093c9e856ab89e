// tests/integration_postgres.rs
use std::sync::Arc;
use std::time::Duration;

use conduit_core::application::{
    commands::articles::{CreateArticleCommand, FavoriteArticleCommand, UnfavoriteArticleCommand},
    commands::users::RegisterUserCommand,
    dto::AuthenticatedUser,
    queries::articles::ListArticlesQuery,
    services::{ApplicationServices, ServiceDependencies},
};
use conduit_core::domain::errors::DomainError;
use conduit_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresFavoriteRepository,
        PostgresFollowRepository, PostgresUserRepository, map_sqlx,
    },
    security::token::JwtTokenManager,
    util::DefaultSlugGenerator,
};
use sqlx::PgPool;

mod support;

use support::{DummyClock, DummyPasswordHasher, TEST_JWT_SECRET, TEST_PASSWORD};

fn postgres_services(pool: &PgPool) -> ApplicationServices {
    ApplicationServices::new(ServiceDependencies {
        user_repo: Arc::new(PostgresUserRepository::new(pool.clone())),
        article_write_repo: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_read_repo: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        favorite_repo: Arc::new(PostgresFavoriteRepository::new(pool.clone())),
        follow_repo: Arc::new(PostgresFollowRepository::new(pool.clone())),
        password_hasher: Arc::new(DummyPasswordHasher),
        token_manager: Arc::new(JwtTokenManager::new(
            TEST_JWT_SECRET,
            Duration::from_secs(3600),
        )),
        clock: Arc::new(DummyClock::default()),
        slugger: Arc::new(DefaultSlugGenerator),
    })
}

async fn register(services: &ApplicationServices, username: &str) -> AuthenticatedUser {
    let dto = services
        .user_commands
        .register(RegisterUserCommand {
            username: username.into(),
            email: format!("{username}@integration.test"),
            password: TEST_PASSWORD.into(),
        })
        .await
        .expect("register");
    services.authenticate(&dto.token).await.expect("authenticate")
}

async fn total_articles(pool: &PgPool) -> u64 {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
        .fetch_one(pool)
        .await
        .expect("count articles");
    count as u64
}

#[tokio::test]
async fn integration_postgres_favorites_listing_and_tags() {
    // Postgres が必要なため明示的に有効化された場合のみ実行
    if std::env::var("RUN_DB_INTEGRATION").unwrap_or_default() != "1" {
        eprintln!("skipping integration test: set RUN_DB_INTEGRATION=1 and DATABASE_URL to run");
        return;
    }

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");
    let pool = database::init_pool(&database_url, 4)
        .await
        .expect("init pool");
    database::run_migrations(&pool)
        .await
        .expect("run migrations");

    let services = postgres_services(&pool);
    let run = chrono::Utc::now().timestamp_micros();
    let author_name = format!("pgauthor{run}");
    let fan_name = format!("pgfan{run}");
    let author = register(&services, &author_name).await;
    let fan = register(&services, &fan_name).await;

    let tag = format!("x{run}dragons");
    let article = services
        .article_commands
        .create_article(
            &author,
            CreateArticleCommand {
                title: "Integration Dragons".into(),
                description: "d".into(),
                body: "b".into(),
                tag_list: vec![tag.clone(), format!("x{run}training")],
            },
        )
        .await
        .expect("create article");
    assert_eq!(article.tag_list, [tag.clone(), format!("x{run}training")]);

    // お気に入り: 2 回追加 → 2 回解除 でカウンタは 1, 1, 0, 0
    let mut counts = Vec::new();
    for _ in 0..2 {
        let dto = services
            .article_commands
            .favorite_article(&fan, FavoriteArticleCommand { slug: article.slug.clone() })
            .await
            .expect("favorite");
        assert!(dto.favorited);
        counts.push(dto.favorites_count);
    }
    for _ in 0..2 {
        let dto = services
            .article_commands
            .unfavorite_article(&fan, UnfavoriteArticleCommand { slug: article.slug.clone() })
            .await
            .expect("unfavorite");
        assert!(!dto.favorited);
        counts.push(dto.favorites_count);
    }
    assert_eq!(counts, [1, 1, 0, 0]);

    // お気に入りのないユーザーで絞り込むと空、件数は絞り込み前の総数
    let list = services
        .article_queries
        .list_articles(
            None,
            ListArticlesQuery {
                favorited: Some(author_name.clone()),
                ..Default::default()
            },
        )
        .await
        .expect("list favorited");
    assert!(list.articles.is_empty());
    assert_eq!(list.articles_count, total_articles(&pool).await);

    // タグは部分一致
    let list = services
        .article_queries
        .list_articles(
            None,
            ListArticlesQuery {
                tag: Some(format!("{run}drag")),
                ..Default::default()
            },
        )
        .await
        .expect("list by tag");
    assert_eq!(list.articles.len(), 1);
    assert_eq!(list.articles[0].slug, article.slug);

    let tags = services.article_queries.list_tags().await.expect("list tags");
    assert!(tags.contains(&tag));

    // カウンタは負にならない（CHECK 制約）
    let err = sqlx::query("UPDATE articles SET favorites_count = -1 WHERE slug = $1")
        .bind(&article.slug)
        .execute(&pool)
        .await
        .expect_err("negative favorites_count must be rejected");
    assert!(matches!(map_sqlx(err), DomainError::Conflict(_)));

    // 後片付け（記事・お気に入りはカスケード削除）
    sqlx::query("DELETE FROM users WHERE username = ANY($1)")
        .bind(vec![author_name, fan_name])
        .execute(&pool)
        .await
        .expect("cleanup");
}
