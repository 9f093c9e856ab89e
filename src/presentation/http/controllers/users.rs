// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand, UpdateUserCommand},
    dto::UserDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub user: RegisterUser,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub user: LoginUser,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub user: UpdateUser,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user: UserDto,
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered.", body = UserResponse),
        (status = 400, description = "Malformed input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Email or username taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Users"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<UserResponse>)> {
    let RegisterUser {
        username,
        email,
        password,
    } = payload.user;

    let user = state
        .services
        .user_commands
        .register(RegisterUserCommand {
            username,
            email,
            password,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in.", body = UserResponse),
        (status = 422, description = "Credentials are not valid.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security([]),
    tag = "Users"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> HttpResult<Json<UserResponse>> {
    let command = LoginUserCommand {
        email: payload.user.email,
        password: payload.user.password,
    };

    let user = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(UserResponse { user }))
}

#[utoipa::path(
    get,
    path = "/api/user",
    responses(
        (status = 200, description = "The authenticated user.", body = UserResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn current_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Json<UserResponse>> {
    let user = state
        .services
        .user_queries
        .current_user(&actor)
        .await
        .into_http()?;

    Ok(Json(UserResponse { user }))
}

#[utoipa::path(
    put,
    path = "/api/user",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user.", body = UserResponse),
        (status = 400, description = "Malformed input.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Email or username taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    JsonBody(payload): JsonBody<UpdateUserRequest>,
) -> HttpResult<Json<UserResponse>> {
    let UpdateUser {
        email,
        username,
        password,
        bio,
        image,
    } = payload.user;

    let command = UpdateUserCommand {
        email,
        username,
        password,
        bio,
        image,
    };

    let user = state
        .services
        .user_commands
        .update_user(&actor, command)
        .await
        .into_http()?;

    Ok(Json(UserResponse { user }))
}
