mod catalog;
mod school;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use test_utils::builder::TestBuilder;
use tower::ServiceExt;
use url::Url;

use crate::server::{
    router,
    state::{AppState, UploadSettings},
    storage::StorageBackend,
};

/// Application under test along with the directory its uploads are written to.
struct TestApp {
    router: Router,
    state: AppState,
    uploads: TempDir,
}

impl TestApp {
    async fn new(backend: StorageBackend) -> Self {
        let test = TestBuilder::new().with_cms_tables().build().await.unwrap();
        let uploads = tempfile::tempdir().unwrap();

        let state = AppState::new(
            backend.connect(test.db.unwrap()),
            UploadSettings {
                dir: uploads.path().to_path_buf(),
                public_url: Url::parse("http://localhost:8000/").unwrap(),
            },
        );

        Self {
            router: router::app(state.clone()),
            state,
            uploads,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn json(&self, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::POST, uri, body).await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.json(Method::PUT, uri, body).await
    }

    /// Creates a school through the API and returns its id.
    async fn create_school(&self, name: &str) -> String {
        let (status, body) = self
            .post(
                "/api/schools",
                json!({ "name": name, "slug": name.to_lowercase() }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);

        body["id"].as_str().unwrap().to_string()
    }
}
