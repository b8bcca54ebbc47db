// ABOUTME: Route handlers for meal-plan generation
// ABOUTME: Deterministic sample recipes in mock mode, 501 when no generator is configured

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Meal-plan routes
//!
//! The full generation path delegates to an external recipe generator that
//! this deployment does not configure, so outside mock mode the batch
//! endpoint reports the feature as not configured. Mock mode serves a
//! deterministic sample plan; `generate-one` serves a sample recipe in all
//! modes so the client's "surprise me" button always works.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::{MealPlanRequest, Recipe};
use crate::server::ServerResources;

const DEFAULT_PROMPT: &str = "Chef choice";
const COOK_TIMES: [&str; 3] = ["20m", "30m", "45m"];
const CATEGORIES: [&str; 3] = ["Quick", "Balanced", "Comfort"];

/// Response wrapper for single-recipe generation
#[derive(Debug, Serialize)]
pub struct SingleRecipeResponse {
    pub recipe: Recipe,
}

/// Build a deterministic sample plan of `count` recipes.
///
/// Recipe ids are millisecond timestamps offset by position, matching what
/// the client expects from real generation; everything else cycles through
/// fixed values.
#[must_use]
pub fn sample_recipes(prompt: &str, count: usize) -> Vec<Recipe> {
    let base_id = Utc::now().timestamp_millis();
    (0..count)
        .map(|i| Recipe {
            id: base_id + i as i64,
            title: format!("{prompt} #{}", i + 1),
            cook_time: COOK_TIMES[i % COOK_TIMES.len()].to_owned(),
            calories: format!("{} kcal", 450 + i * 50),
            category: CATEGORIES[i % CATEGORIES.len()].to_owned(),
            ingredients: vec![
                "1 onion".to_owned(),
                "2 eggs".to_owned(),
                "1 tbsp olive oil".to_owned(),
            ],
            instructions: vec![
                "Prep ingredients".to_owned(),
                "Cook in pan until done".to_owned(),
                "Serve warm".to_owned(),
            ],
            image: String::new(),
        })
        .collect()
}

/// Meal-plan routes handler
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create all meal-plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/mealplan/generate", post(Self::handle_generate))
            .route("/api/mealplan/generate-one", post(Self::handle_generate_one))
            .with_state(resources)
    }

    /// Handle POST /api/mealplan/generate - Generate a batch of six recipes
    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        body: Option<Json<MealPlanRequest>>,
    ) -> Result<Response, AppError> {
        if !resources.config.mock_mode {
            return Err(AppError::feature_not_configured(
                "AI generation not configured on server",
            ));
        }

        let prompt = body
            .and_then(|Json(request)| request.prompt)
            .unwrap_or_else(|| DEFAULT_PROMPT.to_owned());

        Ok((StatusCode::OK, Json(sample_recipes(&prompt, 6))).into_response())
    }

    /// Handle POST /api/mealplan/generate-one - Generate a single recipe
    async fn handle_generate_one(
        State(_resources): State<Arc<ServerResources>>,
        body: Option<Json<MealPlanRequest>>,
    ) -> Result<Response, AppError> {
        let prompt = body
            .and_then(|Json(request)| request.prompt)
            .unwrap_or_else(|| DEFAULT_PROMPT.to_owned());

        let recipe = sample_recipes(&prompt, 1)
            .into_iter()
            .next()
            .ok_or_else(|| AppError::internal("sample generator returned no recipes"))?;

        Ok((StatusCode::OK, Json(SingleRecipeResponse { recipe })).into_response())
    }
}
