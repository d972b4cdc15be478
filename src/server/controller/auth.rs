use axum::{response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, LoginResponseDto, UserDto},
    },
    server::{error::AppError, service::auth::AuthService},
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in as the demo administrator.
///
/// Any non-empty email & password pair is accepted. The returned token is never checked
/// by other endpoints.
///
/// # Returns
/// - `200 OK` - Token and the demo user carrying the submitted email
/// - `401 Unauthorized` - Email or password is empty
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 401, description = "Empty email or password", body = ErrorDto)
    ),
)]
pub async fn login(Json(payload): Json<LoginDto>) -> Result<impl IntoResponse, AppError> {
    let response = AuthService::login(payload)?;

    Ok(Json(response))
}

/// Get the current user.
///
/// Always the fixed demo administrator.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The demo user", body = UserDto)
    ),
)]
pub async fn get_user() -> impl IntoResponse {
    Json(AuthService::current_user())
}
