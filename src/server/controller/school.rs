use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        school::{CreateSchoolDto, SchoolDto, UpdateSchoolThemeDto},
    },
    server::{
        error::AppError, model::school::CreateSchoolParam, service::school::SchoolService,
        state::AppState,
    },
};

/// Tag for grouping school endpoints in OpenAPI documentation
pub static SCHOOL_TAG: &str = "school";

/// Create a new school.
///
/// Generates the school id & creation timestamp. Omitted colors default to `#1D4ED8` and
/// `#FBBF24`, an omitted theme to `default`.
///
/// # Arguments
/// - `state` - Application state containing the storage adapter
/// - `payload` - School name, slug and optional branding
///
/// # Returns
/// - `200 OK` - The created school
/// - `422 Unprocessable Entity` - Missing or mistyped required field
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    post,
    path = "/api/schools",
    tag = SCHOOL_TAG,
    request_body = CreateSchoolDto,
    responses(
        (status = 200, description = "Successfully created school", body = SchoolDto),
        (status = 422, description = "Invalid school data"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_school(
    State(state): State<AppState>,
    Json(payload): Json<CreateSchoolDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateSchoolParam::from_dto(payload);
    let school = SchoolService::new(state.store.as_ref()).create(param).await?;

    Ok(Json(school))
}

/// List schools.
///
/// Returns up to 100 schools, oldest first.
#[utoipa::path(
    get,
    path = "/api/schools",
    tag = SCHOOL_TAG,
    responses(
        (status = 200, description = "Successfully retrieved schools", body = Vec<SchoolDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schools(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let schools = SchoolService::new(state.store.as_ref()).get_all().await?;

    Ok(Json(schools))
}

/// Get a school by id.
///
/// # Returns
/// - `200 OK` - The school
/// - `404 Not Found` - No school with this id
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    get,
    path = "/api/schools/{school_id}",
    tag = SCHOOL_TAG,
    params(
        ("school_id" = String, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved school", body = SchoolDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_school(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let school = SchoolService::new(state.store.as_ref())
        .get_by_id(&school_id)
        .await?;

    Ok(Json(school))
}

/// Delete a school and all of its pages.
///
/// # Returns
/// - `200 OK` - School deleted
/// - `404 Not Found` - No school with this id
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    delete,
    path = "/api/schools/{school_id}",
    tag = SCHOOL_TAG,
    params(
        ("school_id" = String, Path, description = "School ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted school", body = MessageDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_school(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    SchoolService::new(state.store.as_ref())
        .delete(&school_id)
        .await?;

    Ok(Json(MessageDto::new("School deleted")))
}

/// Set the theme of a school.
///
/// The theme id isn't checked against the theme catalog.
///
/// # Returns
/// - `200 OK` - The updated school
/// - `404 Not Found` - No school with this id
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    put,
    path = "/api/schools/{school_id}/theme",
    tag = SCHOOL_TAG,
    params(
        ("school_id" = String, Path, description = "School ID")
    ),
    request_body = UpdateSchoolThemeDto,
    responses(
        (status = 200, description = "Successfully updated theme", body = SchoolDto),
        (status = 404, description = "School not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_school_theme(
    State(state): State<AppState>,
    Path(school_id): Path<String>,
    Json(payload): Json<UpdateSchoolThemeDto>,
) -> Result<impl IntoResponse, AppError> {
    let school = SchoolService::new(state.store.as_ref())
        .update_theme(&school_id, payload.theme_id)
        .await?;

    Ok(Json(school))
}
