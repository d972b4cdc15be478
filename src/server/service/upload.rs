//! Image uploads stored on the local filesystem.

use std::path::Path;
use uuid::Uuid;

use crate::{
    model::upload::UploadDto,
    server::{
        error::{internal::InternalError, AppError},
        state::UploadSettings,
    },
};

/// Content types accepted for upload.
pub const ALLOWED_CONTENT_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/gif", "image/webp"];

const DEFAULT_EXTENSION: &str = "jpg";

/// URL path prefix uploaded files are served under.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// A file received from the client.
pub struct UploadedFile<'a> {
    pub content_type: Option<&'a str>,
    pub file_name: Option<&'a str>,
    pub bytes: &'a [u8],
}

pub struct UploadService<'a> {
    settings: &'a UploadSettings,
}

impl<'a> UploadService<'a> {
    pub fn new(settings: &'a UploadSettings) -> Self {
        Self { settings }
    }

    /// Stores an uploaded image under a freshly generated name.
    ///
    /// The stored name is a simple-format UUID followed by the extension of the original
    /// filename, or `jpg` when the original has none. Files are never deduplicated.
    ///
    /// # Returns
    /// - `Ok(UploadDto)` - Public URL, stored filename & URL path of the file
    /// - `Err(AppError::UnsupportedMedia)` - Content type isn't an allowed image type
    /// - `Err(AppError::IoErr)` - Upload directory couldn't be created or written to
    pub async fn store(&self, file: UploadedFile<'_>) -> Result<UploadDto, AppError> {
        let content_type = file.content_type.unwrap_or_default();
        if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
            return Err(AppError::UnsupportedMedia(format!(
                "File type not allowed. Allowed: {}",
                ALLOWED_CONTENT_TYPES.join(", ")
            )));
        }

        let filename = format!("{}.{}", Uuid::new_v4().simple(), extension(file.file_name));

        tokio::fs::create_dir_all(&self.settings.dir).await?;
        tokio::fs::write(self.settings.dir.join(&filename), file.bytes).await?;

        let path = format!("{}/{}", UPLOADS_ROUTE, filename);
        let url = self
            .settings
            .public_url
            .join(path.trim_start_matches('/'))
            .map_err(|source| InternalError::UploadUrl {
                filename: filename.clone(),
                source,
            })?;

        tracing::info!("Stored upload {} ({} bytes)", filename, file.bytes.len());

        Ok(UploadDto {
            url: url.to_string(),
            filename,
            path,
        })
    }
}

/// Extension of the original filename, if it is a plain alphanumeric one.
fn extension(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}
