// ABOUTME: Integration tests for the shopping-list generation endpoint
// ABOUTME: Exercises the consolidate/subtract/categorize pipeline through HTTP

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::mock_app;
use serde_json::{json, Value};

#[tokio::test]
async fn missing_recipes_field_is_a_client_error() {
    let app = mock_app().await;

    let response = AxumTestRequest::post("/api/shoppinglist/generate")
        .json(&json!({}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn empty_recipe_array_yields_empty_list() {
    let app = mock_app().await;

    let response = AxumTestRequest::post("/api/shoppinglist/generate")
        .json(&json!({"recipes": []}))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn generated_list_groups_and_subtracts_against_seeded_pantry() {
    // The seeded pantry holds "onion", "garlic", and "olive oil". Quantity
    // prefixed lines do not match those names exactly, so every line below
    // survives subtraction and is grouped by keyword.
    let app = mock_app().await;

    let recipes = json!({
        "recipes": [
            {"title": "Soup", "ingredients": ["2 onions", "3 cloves garlic"]},
            {"title": "Salad", "ingredients": ["1 tbsp olive oil", "2 onions"]}
        ]
    });

    let response = AxumTestRequest::post("/api/shoppinglist/generate")
        .json(&recipes)
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    let produce = body["Produce"].as_array().expect("Produce bucket");
    assert_eq!(produce.len(), 2);
    assert_eq!(produce[0]["id"], "Produce-0");
    assert_eq!(produce[0]["name"], "2 onions");
    assert_eq!(produce[0]["quantity"], "");
    assert_eq!(produce[1]["id"], "Produce-1");
    assert_eq!(produce[1]["name"], "3 cloves garlic");

    let pantry = body["Pantry"].as_array().expect("Pantry bucket");
    assert_eq!(pantry.len(), 1);
    assert_eq!(pantry[0]["id"], "Pantry-0");
    assert_eq!(pantry[0]["name"], "1 tbsp olive oil");

    // No meat or unmatched lines in the input
    assert!(body.get("Meat").is_none());
    assert!(body.get("Miscellaneous").is_none());
}

#[tokio::test]
async fn bare_ingredient_names_are_subtracted_by_the_pantry() {
    let app = mock_app().await;

    let recipes = json!({
        "recipes": [
            {"title": "Stir fry", "ingredients": ["Onion", "soy sauce", "chicken thighs"]}
        ]
    });

    let response = AxumTestRequest::post("/api/shoppinglist/generate")
        .json(&recipes)
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    // "Onion" matches the pantry name case-insensitively and is dropped
    assert!(body.get("Produce").is_none());
    assert_eq!(body["Meat"][0]["name"], "chicken thighs");
    assert_eq!(body["Miscellaneous"][0]["name"], "soy sauce");
}

#[tokio::test]
async fn duplicate_lines_across_recipes_collapse_to_one_entry() {
    let app = mock_app().await;

    let recipes = json!({
        "recipes": [
            {"title": "A", "ingredients": ["2 Eggs", "1 head lettuce"]},
            {"title": "B", "ingredients": ["2 eggs"]}
        ]
    });

    let response = AxumTestRequest::post("/api/shoppinglist/generate")
        .json(&recipes)
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();

    let misc = body["Miscellaneous"].as_array().expect("Miscellaneous");
    assert_eq!(misc.len(), 1);
    assert_eq!(misc[0]["name"], "2 eggs");
    assert_eq!(body["Produce"][0]["name"], "1 head lettuce");
}

#[tokio::test]
async fn recipe_without_ingredients_is_rejected() {
    let app = mock_app().await;

    let response = AxumTestRequest::post("/api/shoppinglist/generate")
        .json(&json!({"recipes": [{"title": "Mystery"}]}))
        .send(app)
        .await;

    // serde rejects the malformed recipe before the pipeline runs
    assert_eq!(response.status(), 422);
}
