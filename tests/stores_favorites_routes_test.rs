// ABOUTME: Integration tests for the stores and favorites REST APIs
// ABOUTME: Covers CRUD flows, duplicate conflicts, and validation errors

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::mock_app;
use serde_json::{json, Value};

#[tokio::test]
async fn stores_start_empty_and_accept_new_entries() {
    let app = mock_app().await;

    let stores: Vec<Value> = AxumTestRequest::get("/api/stores")
        .send(app.clone())
        .await
        .json();
    assert!(stores.is_empty());

    let response = AxumTestRequest::post("/api/stores")
        .json(&json!({"name": "Farmers Market"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 201);
    let stores: Vec<Value> = response.json();
    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0]["name"], "Farmers Market");
    assert!(stores[0]["id"].as_str().is_some());
}

#[tokio::test]
async fn duplicate_store_names_conflict() {
    let app = mock_app().await;

    let first = AxumTestRequest::post("/api/stores")
        .json(&json!({"name": "Costco"}))
        .send(app.clone())
        .await;
    assert_eq!(first.status(), 201);

    // Name comparison ignores case
    let second = AxumTestRequest::post("/api/stores")
        .json(&json!({"name": "costco"}))
        .send(app)
        .await;
    assert_eq!(second.status(), 409);
    let body: Value = second.json();
    assert_eq!(body["error"]["code"], "RESOURCE_ALREADY_EXISTS");
}

#[tokio::test]
async fn blank_store_name_is_rejected() {
    let app = mock_app().await;

    let response = AxumTestRequest::post("/api/stores")
        .json(&json!({"name": ""}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn deleting_a_store_acknowledges_and_removes_it() {
    let app = mock_app().await;

    let stores: Vec<Value> = AxumTestRequest::post("/api/stores")
        .json(&json!({"name": "Corner Shop"}))
        .send(app.clone())
        .await
        .json();
    let store_id = stores[0]["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::delete(&format!("/api/stores/{store_id}"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Store deleted");

    let remaining: Vec<Value> = AxumTestRequest::get("/api/stores").send(app).await.json();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn favorites_flow_returns_the_updated_id_list() {
    let app = mock_app().await;

    let favorites: Vec<i64> = AxumTestRequest::get("/api/favorites")
        .send(app.clone())
        .await
        .json();
    assert!(favorites.is_empty());

    let response = AxumTestRequest::post("/api/favorites")
        .json(&json!({"recipeId": 42}))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);
    let favorites: Vec<i64> = response.json();
    assert_eq!(favorites, vec![42]);

    // Adding the same id again does not duplicate
    let favorites: Vec<i64> = AxumTestRequest::post("/api/favorites")
        .json(&json!({"recipeId": 42}))
        .send(app.clone())
        .await
        .json();
    assert_eq!(favorites, vec![42]);

    let response = AxumTestRequest::delete("/api/favorites/42").send(app).await;
    assert_eq!(response.status(), 200);
    let favorites: Vec<i64> = response.json();
    assert!(favorites.is_empty());
}

#[tokio::test]
async fn favorite_without_recipe_id_is_rejected() {
    let app = mock_app().await;

    let response = AxumTestRequest::post("/api/favorites")
        .json(&json!({}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("recipeId"));
}
