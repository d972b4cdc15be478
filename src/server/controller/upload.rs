use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, upload::UploadDto},
    server::{
        error::AppError,
        service::upload::{UploadService, UploadedFile},
        state::AppState,
    },
};

pub static UPLOAD_TAG: &str = "upload";

/// Multipart field holding the uploaded file.
const FILE_FIELD: &str = "file";

/// Upload an image.
///
/// Accepts a multipart form with a `file` field of type `image/jpeg`, `image/png`,
/// `image/gif` or `image/webp`. Other fields are ignored. There's no size limit.
///
/// # Returns
/// - `200 OK` - Public URL, stored filename & path of the image
/// - `400 Bad Request` - Missing `file` field, malformed form or disallowed content type
/// - `500 Internal Server Error` - The file couldn't be written
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = UPLOAD_TAG,
    request_body(content_type = "multipart/form-data", description = "Form with a `file` field"),
    responses(
        (status = 200, description = "Image stored", body = UploadDto),
        (status = 400, description = "Missing file or disallowed content type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await?;

        let upload = UploadService::new(&state.uploads)
            .store(UploadedFile {
                content_type: content_type.as_deref(),
                file_name: file_name.as_deref(),
                bytes: &bytes,
            })
            .await?;

        return Ok(Json(upload));
    }

    Err(AppError::BadRequest(format!(
        "Missing '{}' field in multipart form",
        FILE_FIELD
    )))
}
