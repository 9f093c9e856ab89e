use crate::application::{
    commands::profiles::{FollowUserCommand, UnfollowUserCommand},
    dto::ProfileDto,
    queries::profiles::GetProfileQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub profile: ProfileDto,
}

#[utoipa::path(
    get,
    path = "/api/profiles/{username}",
    params(("username" = String, Path, description = "Username of the profile")),
    responses(
        (status = 200, description = "Profile as seen by the caller.", body = ProfileResponse),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Profiles"
)]
pub async fn get_profile(
    Extension(state): Extension<HttpState>,
    viewer: MaybeAuthenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    let profile = state
        .services
        .profile_queries
        .get_profile(viewer.viewer(), GetProfileQuery { username })
        .await
        .into_http()?;

    Ok(Json(ProfileResponse { profile }))
}

#[utoipa::path(
    post,
    path = "/api/profiles/{username}/follow",
    params(("username" = String, Path, description = "Username to follow")),
    responses(
        (status = 200, description = "Now following.", body = ProfileResponse),
        (status = 400, description = "Cannot follow yourself.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn follow(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    let profile = state
        .services
        .profile_commands
        .follow(&actor, FollowUserCommand { username })
        .await
        .into_http()?;

    Ok(Json(ProfileResponse { profile }))
}

#[utoipa::path(
    delete,
    path = "/api/profiles/{username}/follow",
    params(("username" = String, Path, description = "Username to unfollow")),
    responses(
        (status = 200, description = "No longer following.", body = ProfileResponse),
        (status = 400, description = "Cannot unfollow yourself.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Profiles"
)]
pub async fn unfollow(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(username): Path<String>,
) -> HttpResult<Json<ProfileResponse>> {
    let profile = state
        .services
        .profile_commands
        .unfollow(&actor, UnfollowUserCommand { username })
        .await
        .into_http()?;

    Ok(Json(ProfileResponse { profile }))
}
