//! Integration tests for todo item endpoints.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::store::TodoStore;

fn test_app() -> Router {
    routes::create_router(AppState::new(TodoStore::new()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn create_list(app: &Router, name: &str) -> u64 {
    let (_, body) = send(app, json_request("POST", "/todolists", json!({"name": name}))).await;
    body["id"].as_u64().unwrap()
}

// =============================================================================
// Full scenario
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn groceries_scenario() {
    let app = test_app();

    let (status, list) = send(
        &app,
        json_request("POST", "/todolists", json!({"name": "groceries"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(list["id"], 1);

    let (status, item) = send(
        &app,
        json_request("POST", "/lists/1/items", json!({"description": "milk"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        item,
        json!({"id": 1, "description": "milk", "done": false, "listId": 1})
    );

    let (status, item) = send(&app, empty_request("PATCH", "/items/1/toggle-done")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["done"], true);

    let (status, _) = send(&app, empty_request("DELETE", "/todolists/1")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, empty_request("GET", "/lists/1/items")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "List with id 1 not found"}));
}

// =============================================================================
// GET /lists/{id}/items
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn list_items_filters_by_list() {
    let app = test_app();
    let a = create_list(&app, "a").await;
    let b = create_list(&app, "b").await;

    send(&app, json_request("POST", &format!("/lists/{a}/items"), json!({"description": "a1"}))).await;
    send(&app, json_request("POST", &format!("/lists/{b}/items"), json!({"description": "b1"}))).await;
    send(&app, json_request("POST", &format!("/lists/{a}/items"), json!({"description": "a2"}))).await;

    let (status, items) = send(&app, empty_request("GET", &format!("/lists/{a}/items"))).await;
    assert_eq!(status, StatusCode::OK);

    let descriptions: Vec<&str> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["description"].as_str().unwrap())
        .collect();
    assert_eq!(descriptions, vec!["a1", "a2"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_items_of_empty_list() {
    let app = test_app();
    let id = create_list(&app, "empty").await;

    let (status, items) = send(&app, empty_request("GET", &format!("/lists/{id}/items"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(items, json!([]));
}

// =============================================================================
// POST /lists/{id}/items
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn create_item_in_missing_list_is_not_found() {
    let app = test_app();

    let (status, body) = send(
        &app,
        json_request("POST", "/lists/7/items", json!({"description": "orphan"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "List with id 7 not found");

    // The failed create does not consume an id
    let list = create_list(&app, "real").await;
    let (_, item) = send(
        &app,
        json_request("POST", &format!("/lists/{list}/items"), json!({"description": "x"})),
    )
    .await;
    assert_eq!(item["id"], 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_item_ignores_client_supplied_fields() {
    let app = test_app();
    let list = create_list(&app, "l").await;

    let (_, item) = send(
        &app,
        json_request(
            "POST",
            &format!("/lists/{list}/items"),
            json!({"description": "x", "id": 40, "done": true, "listId": 99}),
        ),
    )
    .await;

    assert_eq!(
        item,
        json!({"id": 1, "description": "x", "done": false, "listId": list})
    );
}

// =============================================================================
// PATCH /items/{id}/description
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn update_item_description_replaces_text() {
    let app = test_app();
    let list = create_list(&app, "l").await;
    send(&app, json_request("POST", &format!("/lists/{list}/items"), json!({"description": "old"}))).await;

    let (status, item) = send(
        &app,
        json_request("PATCH", "/items/1/description", json!({"description": "new"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["description"], "new");
    assert_eq!(item["done"], false);
}

#[tokio::test]
async fn update_missing_item_description_is_not_found() {
    let app = test_app();

    let (status, body) = send(
        &app,
        json_request("PATCH", "/items/3/description", json!({"description": "x"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Item with id 3 not found");
}

// =============================================================================
// PATCH /items/{id}/toggle-done
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn toggle_twice_restores_state() {
    let app = test_app();
    let list = create_list(&app, "l").await;
    send(&app, json_request("POST", &format!("/lists/{list}/items"), json!({"description": "x"}))).await;

    let (_, first) = send(&app, empty_request("PATCH", "/items/1/toggle-done")).await;
    let (_, second) = send(&app, empty_request("PATCH", "/items/1/toggle-done")).await;

    assert_eq!(first["done"], true);
    assert_eq!(second["done"], false);
}

#[tokio::test]
async fn toggle_missing_item_is_not_found() {
    let app = test_app();

    let (status, _) = send(&app, empty_request("PATCH", "/items/1/toggle-done")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// DELETE /items/{id}
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn delete_item_then_missing() {
    let app = test_app();
    let list = create_list(&app, "l").await;
    send(&app, json_request("POST", &format!("/lists/{list}/items"), json!({"description": "x"}))).await;

    let (status, _) = send(&app, empty_request("DELETE", "/items/1")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, empty_request("DELETE", "/items/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, items) = send(&app, empty_request("GET", &format!("/lists/{list}/items"))).await;
    assert_eq!(items, json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn items_survive_list_deletion() {
    let app = test_app();
    let list = create_list(&app, "l").await;
    send(&app, json_request("POST", &format!("/lists/{list}/items"), json!({"description": "x"}))).await;

    send(&app, empty_request("DELETE", &format!("/todolists/{list}"))).await;

    // Item-level routes still reach the dangling item
    let (status, item) = send(&app, empty_request("PATCH", "/items/1/toggle-done")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(item["listId"], list);
}
