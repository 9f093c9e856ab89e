// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tower::util::ServiceExt as _;

use conduit_core::application::{
    commands::articles::CreateArticleCommand,
    commands::users::RegisterUserCommand,
    dto::{ArticleDto, AuthenticatedUser},
    services::{ApplicationServices, ServiceDependencies},
};
use conduit_core::infrastructure::security::token::JwtTokenManager;
use conduit_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{DummyClock, DummyPasswordHasher, InMemoryStore, SequentialSlug, TEST_JWT_SECRET};

pub const TEST_PASSWORD: &str = "password123";

/// インメモリストアに接続したサービス一式
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub services: Arc<ApplicationServices>,
}

pub fn build_services(store: Arc<InMemoryStore>) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(ServiceDependencies {
        user_repo: store.clone(),
        article_write_repo: store.clone(),
        article_read_repo: store.clone(),
        favorite_repo: store.clone(),
        follow_repo: store,
        password_hasher: Arc::new(DummyPasswordHasher),
        token_manager: Arc::new(JwtTokenManager::new(
            TEST_JWT_SECRET,
            Duration::from_secs(3600),
        )),
        clock: Arc::new(DummyClock::default()),
        slugger: Arc::new(SequentialSlug::default()),
    }))
}

pub fn test_app() -> TestApp {
    let store = Arc::new(InMemoryStore::new());
    let services = build_services(Arc::clone(&store));
    TestApp { store, services }
}

impl TestApp {
    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: Arc::clone(&self.services),
        };
        build_router(state, &[])
    }

    /// ユーザーを登録し、認証済みユーザーとトークンを返す
    pub async fn register(&self, username: &str) -> (AuthenticatedUser, String) {
        let dto = self
            .services
            .user_commands
            .register(RegisterUserCommand {
                username: username.into(),
                email: format!("{username}@example.com"),
                password: TEST_PASSWORD.into(),
            })
            .await
            .expect("register");
        let user = self
            .services
            .authenticate(&dto.token)
            .await
            .expect("authenticate freshly issued token");
        (user, dto.token)
    }

    pub async fn create_article(
        &self,
        author: &AuthenticatedUser,
        title: &str,
        tags: &[&str],
    ) -> ArticleDto {
        self.services
            .article_commands
            .create_article(
                author,
                CreateArticleCommand {
                    title: title.into(),
                    description: format!("about {title}"),
                    body: format!("body of {title}"),
                    tag_list: tags.iter().map(|t| t.to_string()).collect(),
                },
            )
            .await
            .expect("create article")
    }
}

/// リクエストを送り、ステータスと JSON ボディを返す（空ボディは Null）
pub async fn send(
    app: axum::Router,
    method: Method,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, json)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// ErrorResponse 形式の JSON であることを確認する
pub fn assert_error_body(body: &Value, expected_error: &str) {
    let err_field = body.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = body.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field in {body}");
    assert!(!msg_field.is_empty(), "expected non-empty message in {body}");
}

/// `<slugified>_<6 base-36 chars>` 形式か
pub fn assert_slug_shape(slug: &str, expected_base: &str) {
    let (base, suffix) = slug
        .rsplit_once('_')
        .unwrap_or_else(|| panic!("slug without suffix: {slug}"));
    assert_eq!(base, expected_base);
    assert_eq!(suffix.len(), 6, "suffix length in {slug}");
    assert!(
        suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()),
        "suffix not base-36 in {slug}"
    );
}
