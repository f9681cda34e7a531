//! HTTP-level integration tests for the single-item overlay endpoints.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router,
//! backed by the in-memory repositories.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_overlay, delete, get, overlay_body, post_json, put_json};
use livecast_db::repositories::OverlayRepo;
use serde_json::json;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_overlay_returns_201_with_defaults() {
    let (app, _store) = build_test_app();
    let response = post_json(app, "/api/overlays", overlay_body("text")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Overlay created successfully");

    let data = &json["data"];
    assert!(!data["_id"].as_str().unwrap().is_empty());
    assert_eq!(data["type"], "text");
    assert_eq!(data["fontSize"], 16);
    assert_eq!(data["color"], "#ffffff");
    assert_eq!(data["backgroundColor"], "rgba(0,0,0,0.5)");
    assert_eq!(data["borderRadius"], 4);
    assert_eq!(data["created_at"], data["updated_at"]);
}

#[tokio::test]
async fn test_create_overlay_coerces_numeric_strings() {
    let (app, _store) = build_test_app();
    let body = json!({
        "type": "logo", "content": "https://cdn.example/logo.png",
        "x": "5", "y": 6.8, "width": "120", "height": 40, "borderRadius": "0"
    });
    let response = post_json(app, "/api/overlays", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["x"], 5);
    assert_eq!(data["y"], 6);
    assert_eq!(data["width"], 120);
    assert_eq!(data["borderRadius"], 0);
}

#[tokio::test]
async fn test_create_overlay_missing_field_returns_400_and_persists_nothing() {
    for field in ["type", "content", "x", "y", "width", "height"] {
        let (app, store) = build_test_app();
        let mut body = overlay_body("text");
        body.as_object_mut().unwrap().remove(field);

        let response = post_json(app, "/api/overlays", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], format!("Missing required field: {field}"));
        assert_eq!(store.count(None).await.unwrap(), 0);
    }
}

#[tokio::test]
async fn test_create_overlay_non_numeric_geometry_returns_400() {
    let (app, store) = build_test_app();
    let mut body = overlay_body("text");
    body["width"] = json!("wide");

    let response = post_json(app, "/api/overlays", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);
    assert_eq!(store.count(None).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_overlay_with_invalid_json_returns_400_envelope() {
    let (app, _store) = build_test_app();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/overlays")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
}

// ---------------------------------------------------------------------------
// List / get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_overlays_includes_count() {
    let (app, _store) = build_test_app();
    create_overlay(&app, "text").await;
    create_overlay(&app, "logo").await;

    let response = get(app, "/api/overlays").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    let data = json["data"].as_array().unwrap();
    assert_eq!(data[0]["type"], "text");
    assert_eq!(data[1]["type"], "logo");
}

#[tokio::test]
async fn test_list_overlays_empty_store() {
    let (app, _store) = build_test_app();
    let json = body_json(get(app, "/api/overlays").await).await;
    assert_eq!(json["count"], 0);
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn test_get_overlay_by_id() {
    let (app, _store) = build_test_app();
    let id = create_overlay(&app, "text").await;

    let response = get(app, &format!("/api/overlays/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["_id"], id);
    assert_eq!(json["data"]["content"], "Breaking news");
}

#[tokio::test]
async fn test_get_nonexistent_overlay_returns_404() {
    let (app, _store) = build_test_app();
    let response = get(app, "/api/overlays/65f0a1b2c3d4e5f601234567").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Overlay not found");
}

#[tokio::test]
async fn test_get_malformed_id_returns_404() {
    let (app, _store) = build_test_app();
    let response = get(app, "/api/overlays/not-an-object-id").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_update_overlay_with_change_advances_updated_at() {
    let (app, _store) = build_test_app();
    let id = create_overlay(&app, "text").await;
    let before = body_json(get(app.clone(), &format!("/api/overlays/{id}")).await).await;

    tokio::time::sleep(Duration::from_millis(5)).await;

    let response = put_json(
        app.clone(),
        &format!("/api/overlays/{id}"),
        json!({"content": "Updated", "fontSize": "24"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Overlay updated successfully");
    assert_eq!(json["data"]["content"], "Updated");
    assert_eq!(json["data"]["fontSize"], 24);
    assert_eq!(json["data"]["created_at"], before["data"]["created_at"]);
    assert_ne!(json["data"]["updated_at"], before["data"]["updated_at"]);

    let after = body_json(get(app, &format!("/api/overlays/{id}")).await).await;
    assert_eq!(after["data"]["content"], "Updated");
    assert_eq!(after["data"]["x"], 10);
}

#[tokio::test]
async fn test_update_overlay_with_identical_values_returns_400() {
    let (app, _store) = build_test_app();
    let id = create_overlay(&app, "text").await;
    let before = body_json(get(app.clone(), &format!("/api/overlays/{id}")).await).await;

    let response = put_json(app.clone(), &format!("/api/overlays/{id}"), overlay_body("text")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No changes made");

    let after = body_json(get(app, &format!("/api/overlays/{id}")).await).await;
    assert_eq!(after["data"], before["data"]);
}

#[tokio::test]
async fn test_update_overlay_with_empty_body_returns_400() {
    let (app, _store) = build_test_app();
    let id = create_overlay(&app, "text").await;

    let response = put_json(app, &format!("/api/overlays/{id}"), json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No changes made");
}

#[tokio::test]
async fn test_update_overlay_ignores_non_updatable_fields() {
    let (app, _store) = build_test_app();
    let id = create_overlay(&app, "text").await;

    let response = put_json(
        app,
        &format!("/api/overlays/{id}"),
        json!({"_id": "65f0a1b2c3d4e5f601234567", "created_at": "1999-01-01T00:00:00Z"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No changes made");
}

#[tokio::test]
async fn test_update_nonexistent_overlay_returns_404() {
    let (app, _store) = build_test_app();
    let response = put_json(
        app,
        "/api/overlays/65f0a1b2c3d4e5f601234567",
        json!({"content": "x"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_overlay_then_get_returns_404() {
    let (app, _store) = build_test_app();
    let id = create_overlay(&app, "logo").await;

    let response = delete(app.clone(), &format!("/api/overlays/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Overlay deleted successfully");
    assert!(json.get("data").is_none());

    let response = get(app, &format!("/api/overlays/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_overlay_returns_404() {
    let (app, _store) = build_test_app();
    let response = delete(app, "/api/overlays/65f0a1b2c3d4e5f601234567").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
