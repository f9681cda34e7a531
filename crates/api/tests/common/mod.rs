#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use livecast_api::config::ServerConfig;
use livecast_api::router::build_app_router;
use livecast_api::state::AppState;
use livecast_db::repositories::InMemoryStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin and a 30-second
/// request timeout. The store settings are unused by in-memory tests.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        mongo_uri: String::new(),
        db_name: "livecast-test".to_string(),
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// The store is returned as well so tests can inspect persisted state
/// directly. Clone the router for each request; clones share the store.
pub fn build_test_app() -> (Router, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(store.clone(), store.clone(), test_config());
    (build_app_router(state, &test_config()), store)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn delete_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::DELETE, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A complete single-create body.
pub fn overlay_body(kind: &str) -> serde_json::Value {
    serde_json::json!({
        "type": kind,
        "content": "Breaking news",
        "x": 10,
        "y": 20,
        "width": 300,
        "height": 60
    })
}

/// Create an overlay through the API and return its id.
pub async fn create_overlay(app: &Router, kind: &str) -> String {
    let response = post_json(app.clone(), "/api/overlays", overlay_body(kind)).await;
    let json = body_json(response).await;
    json["data"]["_id"].as_str().unwrap().to_string()
}
