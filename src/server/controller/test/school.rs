use super::*;

/// Tests fetching a school that doesn't exist.
///
/// Expected: 404 with "School not found"
#[tokio::test]
async fn unknown_school_is_not_found() {
    let app = TestApp::new(StorageBackend::Relational).await;

    let (status, body) = app.get("/api/schools/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "School not found");
}

/// Tests creating a school with only the required fields.
///
/// Expected: 200 with generated id, defaults and unknown fields dropped
#[tokio::test]
async fn creates_school_with_defaults() {
    let app = TestApp::new(StorageBackend::Relational).await;

    let (status, body) = app
        .post(
            "/api/schools",
            json!({ "name": "Hillside", "slug": "hillside", "mascot": "owl" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["primary_color"], "#1D4ED8");
    assert_eq!(body["secondary_color"], "#FBBF24");
    assert_eq!(body["theme_id"], "default");
    assert!(body["created_at"].is_string());
    assert!(body.get("mascot").is_none());

    let id = body["id"].as_str().unwrap();
    let (status, fetched) = app.get(&format!("/api/schools/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Hillside");
}

/// Tests creating a school without its required slug.
///
/// Expected: 422 from the JSON extractor
#[tokio::test]
async fn rejects_school_without_slug() {
    let app = TestApp::new(StorageBackend::Relational).await;

    let (status, _) = app.post("/api/schools", json!({ "name": "Hillside" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

/// Tests deleting a school through the API.
///
/// Verifies that pages of the school are gone afterwards on both backends.
///
/// Expected: 200 "School deleted", then 404 for the school and its pages
#[tokio::test]
async fn delete_school_removes_pages() {
    for backend in [StorageBackend::Relational, StorageBackend::Document] {
        let app = TestApp::new(backend).await;
        let school_id = app.create_school("Hillside").await;

        let (_, page) = app
            .post(
                "/api/pages",
                json!({ "school_id": school_id, "name": "Home", "slug": "home" }),
            )
            .await;
        let page_id = page["id"].as_str().unwrap().to_string();

        let (status, body) = app.delete(&format!("/api/schools/{}", school_id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "School deleted");

        let (status, _) = app.get(&format!("/api/pages/{}", page_id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, pages) = app
            .get(&format!("/api/pages?school_id={}", school_id))
            .await;
        assert_eq!(pages, json!([]));

        let (status, _) = app.delete(&format!("/api/schools/{}", school_id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

/// Tests switching a school's theme.
///
/// Expected: 200 with the new theme id, 404 for an unknown school
#[tokio::test]
async fn updates_theme() {
    let app = TestApp::new(StorageBackend::Relational).await;
    let school_id = app.create_school("Hillside").await;

    let (status, body) = app
        .put(
            &format!("/api/schools/{}/theme", school_id),
            json!({ "theme_id": "forest" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["theme_id"], "forest");

    let (status, _) = app
        .put("/api/schools/missing/theme", json!({ "theme_id": "forest" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
