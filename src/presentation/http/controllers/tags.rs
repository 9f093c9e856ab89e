use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TagsResponse {
    pub tags: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/api/tags",
    responses(
        (status = 200, description = "Distinct tags, sorted.", body = TagsResponse)
    ),
    security([]),
    tag = "Articles"
)]
pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<TagsResponse>> {
    let tags = state
        .services
        .article_queries
        .list_tags()
        .await
        .into_http()?;

    Ok(Json(TagsResponse { tags }))
}
