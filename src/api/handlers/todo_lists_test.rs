//! Integration tests for todo list endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::store::TodoStore;

/// Create a test app over a fresh store
fn test_app() -> axum::Router {
    routes::create_router(AppState::new(TodoStore::new()))
}

/// Helper to parse JSON response body
async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// =============================================================================
// System
// =============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let response = test_app().oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn root_returns_banner() {
    let response = test_app().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], crate::banner().as_bytes());
}

// =============================================================================
// GET /todolists
// =============================================================================

#[tokio::test]
async fn list_todo_lists_empty() {
    let response = test_app().oneshot(get("/todolists")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_todo_lists_in_creation_order() {
    let app = test_app();

    for name in ["a", "b", "c"] {
        app.clone()
            .oneshot(json_request("POST", "/todolists", json!({"name": name})))
            .await
            .unwrap();
    }

    let response = app.oneshot(get("/todolists")).await.unwrap();
    let body = json_body(response).await;

    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "a"},
            {"id": 2, "name": "b"},
            {"id": 3, "name": "c"}
        ])
    );
}

// =============================================================================
// POST /todolists
// =============================================================================

#[tokio::test]
async fn create_todo_list_returns_created() {
    let response = test_app()
        .oneshot(json_request(
            "POST",
            "/todolists",
            json!({"name": "groceries"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        json_body(response).await,
        json!({"id": 1, "name": "groceries"})
    );
}

#[tokio::test]
async fn create_todo_list_without_name_is_rejected() {
    let response = test_app()
        .oneshot(json_request("POST", "/todolists", json!({})))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test(flavor = "multi_thread")]
async fn ids_are_not_reused_after_delete() {
    let app = test_app();

    app.clone()
        .oneshot(json_request("POST", "/todolists", json!({"name": "a"})))
        .await
        .unwrap();
    app.clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/todolists/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let response = app
        .oneshot(json_request("POST", "/todolists", json!({"name": "b"})))
        .await
        .unwrap();

    assert_eq!(json_body(response).await["id"], 2);
}

// =============================================================================
// GET /todolists/{id}
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn get_todo_list_found() {
    let app = test_app();
    app.clone()
        .oneshot(json_request("POST", "/todolists", json!({"name": "work"})))
        .await
        .unwrap();

    let response = app.oneshot(get("/todolists/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"id": 1, "name": "work"}));
}

#[tokio::test]
async fn get_todo_list_not_found() {
    let response = test_app().oneshot(get("/todolists/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response).await,
        json!({"error": "List with id 99 not found"})
    );
}

// =============================================================================
// PUT /todolists/{id}
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn update_todo_list_renames() {
    let app = test_app();
    app.clone()
        .oneshot(json_request("POST", "/todolists", json!({"name": "old"})))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/todolists/1", json!({"name": "new"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"id": 1, "name": "new"}));

    let response = app.oneshot(get("/todolists/1")).await.unwrap();
    assert_eq!(json_body(response).await["name"], "new");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_missing_todo_list_is_not_found_and_creates_nothing() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/todolists/5", json!({"name": "ghost"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/todolists")).await.unwrap();
    assert_eq!(json_body(response).await, json!([]));
}

// =============================================================================
// DELETE /todolists/{id}
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn delete_todo_list_returns_no_content() {
    let app = test_app();
    app.clone()
        .oneshot(json_request("POST", "/todolists", json!({"name": "tmp"})))
        .await
        .unwrap();

    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri("/todolists/1")
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting again is still a no-op success
    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(get("/todolists/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn openapi_docs_are_served() {
    let response = test_app().oneshot(get("/docs")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
