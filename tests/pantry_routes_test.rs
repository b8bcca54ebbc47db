// ABOUTME: Integration tests for the pantry REST API
// ABOUTME: Covers listing, adding, and removing pantry items through HTTP

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::{mock_app, sqlite_app};
use serde_json::{json, Value};

#[tokio::test]
async fn mock_pantry_starts_with_seeded_items() {
    let app = mock_app().await;

    let response = AxumTestRequest::get("/api/pantry").send(app).await;
    assert_eq!(response.status(), 200);

    let pantry: Vec<Value> = response.json();
    let names: Vec<&str> = pantry
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["onion", "garlic", "olive oil"]);
    assert_eq!(pantry[0]["quantity"], "2");
    assert_eq!(pantry[1]["quantity"], "3 cloves");
    assert_eq!(pantry[2]["quantity"], "250 ml");
}

#[tokio::test]
async fn adding_an_item_returns_the_updated_pantry() {
    let app = mock_app().await;

    let response = AxumTestRequest::post("/api/pantry")
        .json(&json!({"name": "flour", "quantity": "1 kg"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 201);
    let pantry: Vec<Value> = response.json();
    assert_eq!(pantry.len(), 4);
    assert_eq!(pantry[3]["name"], "flour");
    assert_eq!(pantry[3]["quantity"], "1 kg");
    assert!(pantry[3]["id"].as_str().is_some());
}

#[tokio::test]
async fn adding_an_item_without_a_name_is_rejected() {
    let app = mock_app().await;

    let response = AxumTestRequest::post("/api/pantry")
        .json(&json!({"name": "  ", "quantity": "1"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn deleting_an_item_acknowledges_and_removes_it() {
    let app = mock_app().await;

    let pantry: Vec<Value> = AxumTestRequest::get("/api/pantry")
        .send(app.clone())
        .await
        .json();
    let first_id = pantry[0]["id"].as_str().unwrap().to_owned();

    let response = AxumTestRequest::delete(&format!("/api/pantry/{first_id}"))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Item deleted");

    let remaining: Vec<Value> = AxumTestRequest::get("/api/pantry").send(app).await.json();
    assert_eq!(remaining.len(), pantry.len() - 1);
    assert!(remaining.iter().all(|item| item["id"] != first_id.as_str()));
}

#[tokio::test]
async fn deleting_an_unknown_item_is_a_no_op() {
    let app = mock_app().await;

    let response = AxumTestRequest::delete(&format!("/api/pantry/{}", uuid::Uuid::new_v4()))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Item deleted");
}

#[tokio::test]
async fn pantry_persists_through_the_sqlite_backend() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = sqlite_app(&dir).await;

    let response = AxumTestRequest::post("/api/pantry")
        .json(&json!({"name": "rice", "quantity": "2 kg"}))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 201);

    let pantry: Vec<Value> = AxumTestRequest::get("/api/pantry").send(app).await.json();
    assert_eq!(pantry.len(), 1);
    assert_eq!(pantry[0]["name"], "rice");
}
