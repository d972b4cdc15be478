use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::server::controller;

/// OpenAPI document covering every `/api` endpoint.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CleverCampus CMS API",
        version = "1.0.0",
        description = "Content management backend for school website pages"
    ),
    paths(
        controller::root::root,
        controller::auth::login,
        controller::auth::get_user,
        controller::school::create_school,
        controller::school::get_schools,
        controller::school::get_school,
        controller::school::delete_school,
        controller::school::update_school_theme,
        controller::page::create_page,
        controller::page::get_pages,
        controller::page::get_page,
        controller::page::update_page,
        controller::page::delete_page,
        controller::catalog::get_component_templates,
        controller::catalog::get_themes,
        controller::upload::upload_image,
        controller::seed::seed,
    ),
    tags(
        (name = "root", description = "API information"),
        (name = "auth", description = "Demo authentication"),
        (name = "school", description = "School management"),
        (name = "page", description = "Page management"),
        (name = "catalog", description = "Widget and theme catalogs"),
        (name = "upload", description = "Image uploads"),
        (name = "seed", description = "Demo data")
    )
)]
pub struct ApiDoc;

/// Serves the generated OpenAPI document.
pub async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/",
            "/api/auth/login",
            "/api/auth/me",
            "/api/schools",
            "/api/schools/{school_id}",
            "/api/schools/{school_id}/theme",
            "/api/pages",
            "/api/pages/{page_id}",
            "/api/templates/components",
            "/api/themes",
            "/api/upload",
            "/api/seed",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
