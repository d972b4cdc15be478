//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;
pub mod storage;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, storage::StorageError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Storage adapter error.
    ///
    /// Foreign key violations result in 400 Bad Request, everything else in
    /// 500 Internal Server Error with the cause logged server-side.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Internal issue such as a stored document that no longer decodes.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database error from SeaORM raised outside of the storage adapter (startup, migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Filesystem or socket error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Uploaded file has a content type outside of the image allow-list.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    UnsupportedMedia(String),

    /// Multipart form couldn't be read.
    ///
    /// Responds with the status axum assigns to the failure, e.g. 400 for a malformed form
    /// or 413 when the body exceeds its limit.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `UnsupportedMedia` & foreign key violations
/// - 401 Unauthorized - For `AuthErr`, delegated to `AuthError::into_response()`
/// - `MultipartError::status()` - For `MultipartErr`
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) | Self::UnsupportedMedia(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::MultipartErr(err) => {
                (err.status(), Json(ErrorDto { error: err.body_text() })).into_response()
            }
            Self::StorageErr(StorageError::ForeignKeyViolation(detail)) => {
                tracing::debug!("Rejected write with dangling reference: {}", detail);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Referenced record does not exist".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error, check the server logs for details".to_string(),
            }),
        )
            .into_response()
    }
}
