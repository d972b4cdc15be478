use axum::{response::IntoResponse, Json};

use crate::{
    model::catalog::{ComponentCatalogDto, ThemeCatalogDto},
    server::service::catalog::CatalogService,
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

/// Get the widget catalog.
///
/// Lists every widget template the page builder offers along with its default props, and
/// the categories they are grouped in.
#[utoipa::path(
    get,
    path = "/api/templates/components",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Widget templates and categories", body = ComponentCatalogDto)
    ),
)]
pub async fn get_component_templates() -> impl IntoResponse {
    Json(CatalogService::components())
}

/// Get the theme catalog.
#[utoipa::path(
    get,
    path = "/api/themes",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Available themes", body = ThemeCatalogDto)
    ),
)]
pub async fn get_themes() -> impl IntoResponse {
    Json(CatalogService::themes())
}
