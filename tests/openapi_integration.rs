// tests/openapi_integration.rs
use axum::http::{Method, StatusCode};

mod support;

use support::send;

#[tokio::test]
async fn openapi_document_is_served() {
    let app = support::test_app();

    let (status, body) = send(app.router(), Method::GET, "/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let paths = body["paths"].as_object().expect("paths object");
    for path in [
        "/api/users",
        "/api/users/login",
        "/api/user",
        "/api/profiles/{username}",
        "/api/profiles/{username}/follow",
        "/api/articles",
        "/api/articles/{slug}",
        "/api/articles/{slug}/favorite",
        "/api/tags",
    ] {
        assert!(paths.contains_key(path), "missing path {path}");
    }
    assert!(body["components"]["securitySchemes"]["bearerAuth"].is_object());
}

#[tokio::test]
async fn redoc_page_is_served() {
    let app = support::test_app();

    let (status, body) = send(app.router(), Method::GET, "/redoc", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_str().is_some_and(|html| html.contains("redoc")));
}
