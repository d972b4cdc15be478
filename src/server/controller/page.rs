use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        page::{CreatePageDto, PageDto, UpdatePageDto},
    },
    server::{
        error::AppError,
        model::page::{CreatePageParam, UpdatePageParam},
        service::page::PageService,
        state::AppState,
    },
};

/// Tag for grouping page endpoints in OpenAPI documentation
pub static PAGE_TAG: &str = "page";

/// Query parameters for listing pages.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQueryParams {
    /// Only return pages of this school
    pub school_id: Option<String>,
}

/// Create a new page.
///
/// Components without an id get a generated one, missing props default to `{}` and a
/// missing order to 0. New pages are unpublished.
///
/// # Returns
/// - `200 OK` - The created page
/// - `400 Bad Request` - The referenced school doesn't exist (relational storage only)
/// - `422 Unprocessable Entity` - Missing or mistyped required field
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    post,
    path = "/api/pages",
    tag = PAGE_TAG,
    request_body = CreatePageDto,
    responses(
        (status = 200, description = "Successfully created page", body = PageDto),
        (status = 400, description = "Referenced school does not exist", body = ErrorDto),
        (status = 422, description = "Invalid page data"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_page(
    State(state): State<AppState>,
    Json(payload): Json<CreatePageDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreatePageParam::from_dto(payload);
    let page = PageService::new(state.store.as_ref()).create(param).await?;

    Ok(Json(page))
}

/// List pages.
///
/// Returns up to 100 pages, oldest first, optionally filtered by school.
#[utoipa::path(
    get,
    path = "/api/pages",
    tag = PAGE_TAG,
    params(PageQueryParams),
    responses(
        (status = 200, description = "Successfully retrieved pages", body = Vec<PageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pages(
    State(state): State<AppState>,
    Query(params): Query<PageQueryParams>,
) -> Result<impl IntoResponse, AppError> {
    let school_id = params.school_id.filter(|school_id| !school_id.is_empty());

    let pages = PageService::new(state.store.as_ref())
        .get_all(school_id.as_deref())
        .await?;

    Ok(Json(pages))
}

/// Get a page by id.
#[utoipa::path(
    get,
    path = "/api/pages/{page_id}",
    tag = PAGE_TAG,
    params(
        ("page_id" = String, Path, description = "Page ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved page", body = PageDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageService::new(state.store.as_ref())
        .get_by_id(&page_id)
        .await?;

    Ok(Json(page))
}

/// Update a page.
///
/// Only supplied fields are applied; `updated_at` is always refreshed. A supplied
/// component list replaces the stored one and is normalized like on create.
///
/// # Returns
/// - `200 OK` - The page after the update
/// - `404 Not Found` - No page with this id
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    put,
    path = "/api/pages/{page_id}",
    tag = PAGE_TAG,
    params(
        ("page_id" = String, Path, description = "Page ID")
    ),
    request_body = UpdatePageDto,
    responses(
        (status = 200, description = "Successfully updated page", body = PageDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_page(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
    Json(payload): Json<UpdatePageDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdatePageParam::from_dto(payload);
    let page = PageService::new(state.store.as_ref())
        .update(&page_id, param)
        .await?;

    Ok(Json(page))
}

/// Delete a page.
#[utoipa::path(
    delete,
    path = "/api/pages/{page_id}",
    tag = PAGE_TAG,
    params(
        ("page_id" = String, Path, description = "Page ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted page", body = MessageDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_page(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    PageService::new(state.store.as_ref())
        .delete(&page_id)
        .await?;

    Ok(Json(MessageDto::new("Page deleted")))
}
