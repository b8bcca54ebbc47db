// ABOUTME: Route handler for shopping-list generation
// ABOUTME: Runs the consolidate/subtract/categorize pipeline against the stored pantry

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Shopping-list routes
//!
//! Takes the recipes selected by the client, consolidates their ingredient
//! lines, subtracts what the pantry already covers, and returns the
//! remainder grouped by category.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::debug;

use crate::errors::AppError;
use crate::models::GenerateShoppingListRequest;
use crate::server::ServerResources;
use crate::shopping::generate_shopping_list;
use crate::storage::StorageProvider;

/// Shopping-list routes handler
pub struct ShoppingListRoutes;

impl ShoppingListRoutes {
    /// Create all shopping-list routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/shoppinglist/generate", post(Self::handle_generate))
            .with_state(resources)
    }

    /// Handle POST /api/shoppinglist/generate - Build a grouped shopping list
    ///
    /// An absent `recipes` field is a client error; an empty array is valid
    /// and yields an empty list. Pantry lookup failures surface as storage
    /// errors rather than an empty pantry, so the client never receives an
    /// over-long list it believes is pantry-adjusted.
    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<GenerateShoppingListRequest>,
    ) -> Result<Response, AppError> {
        let recipes = body
            .recipes
            .ok_or_else(|| AppError::missing_field("recipes"))?;

        let pantry = resources
            .storage
            .get_pantry(resources.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_user_id(resources.user_id))?;

        let grouped = generate_shopping_list(&recipes, &pantry);
        debug!(
            recipes = recipes.len(),
            pantry_items = pantry.len(),
            categories = grouped.len(),
            "generated shopping list"
        );

        Ok((StatusCode::OK, Json(grouped)).into_response())
    }
}
