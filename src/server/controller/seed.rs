use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, seed::SeedDto},
    server::{error::AppError, service::seed::SeedService, state::AppState},
};

pub static SEED_TAG: &str = "seed";

/// Seed demo data.
///
/// Inserts the demo school with a published home page, unless any school already exists.
///
/// # Returns
/// - `200 OK` - Ids of the seeded records, or a message that data already exists
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    post,
    path = "/api/seed",
    tag = SEED_TAG,
    responses(
        (status = 200, description = "Seed result", body = SeedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seed(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let result = SeedService::new(state.store.as_ref()).seed().await?;

    Ok(Json(result))
}
