// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{Request, Response};
use player_portal::config::Config;
use player_portal::db::RecordStore;
use player_portal::routes::create_router;
use player_portal::services::PortalService;
use player_portal::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Directory holding the JSON fixtures.
#[allow(dead_code)]
pub const FIXTURE_DIR: &str = "tests/fixtures";

/// Record store backed by the fixture files.
#[allow(dead_code)]
pub fn fixture_store() -> RecordStore {
    RecordStore::from_dir(FIXTURE_DIR)
}

/// Create a test app over the fixture data.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let state = Arc::new(AppState {
        portal: PortalService::new(RecordStore::from_dir(&config.data_dir)),
        config,
    });

    (create_router(state.clone()), state)
}

/// Send a GET request to a fresh test app.
#[allow(dead_code)]
pub async fn get(uri: &str) -> Response<Body> {
    let (app, _) = create_test_app();
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a JSON POST request to a fresh test app.
#[allow(dead_code)]
pub async fn post_json(uri: &str, body: serde_json::Value) -> Response<Body> {
    let (app, _) = create_test_app();
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST with an arbitrary body and optional content type.
#[allow(dead_code)]
pub async fn post_raw(uri: &str, content_type: Option<&str>, body: &str) -> Response<Body> {
    let (app, _) = create_test_app();
    let mut request = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        request = request.header("content-type", content_type);
    }
    app.oneshot(request.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
