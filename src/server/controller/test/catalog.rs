use super::*;

/// Tests the widget catalog endpoint.
///
/// Expected: 200 with 13 widgets and 3 categories in camelCase
#[tokio::test]
async fn lists_component_templates() {
    let app = TestApp::new(StorageBackend::Relational).await;

    let (status, body) = app.get("/api/templates/components").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["widgets"].as_array().map(Vec::len), Some(13));
    assert_eq!(body["categories"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["widgets"][0]["type"], "hero");
    assert!(body["widgets"][0]["defaultProps"].is_object());
}

/// Tests the theme catalog endpoint.
///
/// Expected: 200 with a `default` theme holding a full palette
#[tokio::test]
async fn lists_themes() {
    let app = TestApp::new(StorageBackend::Relational).await;

    let (status, body) = app.get("/api/themes").await;

    assert_eq!(status, StatusCode::OK);
    let default = body["themes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|theme| theme["id"] == "default")
        .unwrap();
    for color in ["primary", "secondary", "accent", "background", "text"] {
        assert!(default["colors"][color].is_string());
    }
    assert!(default["fontFamily"].is_string());
}
