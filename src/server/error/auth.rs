use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login attempted with an empty email or password.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Login rejected due to empty credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid credentials"
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
