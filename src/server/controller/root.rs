use axum::{response::IntoResponse, Json};

use crate::model::api::ApiInfoDto;

pub static ROOT_TAG: &str = "root";

const API_NAME: &str = "CleverCampus CMS API";
const API_VERSION: &str = "1.0.0";

/// Describe the API.
///
/// # Returns
/// - `200 OK` - API name & version
#[utoipa::path(
    get,
    path = "/api/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "API name and version", body = ApiInfoDto)
    ),
)]
pub async fn root() -> impl IntoResponse {
    Json(ApiInfoDto {
        message: API_NAME.to_string(),
        version: API_VERSION.to_string(),
    })
}
