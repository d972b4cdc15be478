use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::server::{
    controller::{
        auth::{get_user, login},
        catalog::{get_component_templates, get_themes},
        page::{create_page, delete_page, get_page, get_pages, update_page},
        root::root,
        school::{create_school, delete_school, get_school, get_schools, update_school_theme},
        seed::seed,
        upload::upload_image,
    },
    openapi::openapi,
    service::upload::UPLOADS_ROUTE,
    state::AppState,
};

/// API routes, all under the `/api` prefix.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/openapi.json", get(openapi))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(get_user))
        .route("/api/schools", post(create_school).get(get_schools))
        .route(
            "/api/schools/{school_id}",
            get(get_school).delete(delete_school),
        )
        .route("/api/schools/{school_id}/theme", put(update_school_theme))
        .route("/api/pages", post(create_page).get(get_pages))
        .route(
            "/api/pages/{page_id}",
            get(get_page).put(update_page).delete(delete_page),
        )
        .route("/api/templates/components", get(get_component_templates))
        .route("/api/themes", get(get_themes))
        .route(
            "/api/upload",
            post(upload_image).layer(DefaultBodyLimit::disable()),
        )
        .route("/api/seed", post(seed))
}

/// Complete application: API routes, uploaded file serving and request tracing.
///
/// CORS is applied by the caller since it depends on configuration.
pub fn app(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.uploads.dir);

    router()
        .with_state(state)
        .nest_service(UPLOADS_ROUTE, uploads)
        .layer(TraceLayer::new_for_http())
}
