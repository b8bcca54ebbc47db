// ABOUTME: Route handlers for the favorite-recipes REST API
// ABOUTME: Maintains a deduplicated list of favorited recipe ids

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Favorite routes
//!
//! Favorites are a flat list of recipe ids kept for the household. Mutating
//! endpoints return the full updated list so the client stays in sync
//! without a second request.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};

use crate::errors::AppError;
use crate::models::AddFavoriteRequest;
use crate::server::ServerResources;
use crate::storage::StorageProvider;

/// Favorite routes handler
pub struct FavoritesRoutes;

impl FavoritesRoutes {
    /// Create all favorite routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/favorites", get(Self::handle_list))
            .route("/api/favorites", post(Self::handle_add))
            .route("/api/favorites/:recipe_id", delete(Self::handle_remove))
            .with_state(resources)
    }

    /// Handle GET /api/favorites - List favorited recipe ids
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let favorites = resources.storage.get_favorites().await?;
        Ok((StatusCode::OK, Json(favorites)).into_response())
    }

    /// Handle POST /api/favorites - Add a favorite, returning the updated list
    async fn handle_add(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<AddFavoriteRequest>,
    ) -> Result<Response, AppError> {
        let recipe_id = body
            .recipe_id
            .ok_or_else(|| AppError::missing_field("recipeId"))?;

        resources.storage.add_favorite(recipe_id).await?;
        let favorites = resources.storage.get_favorites().await?;

        Ok((StatusCode::CREATED, Json(favorites)).into_response())
    }

    /// Handle DELETE /api/favorites/:recipe_id - Remove a favorite
    ///
    /// Removing an id that was never favorited is a no-op; the updated list
    /// is returned either way.
    async fn handle_remove(
        State(resources): State<Arc<ServerResources>>,
        Path(recipe_id): Path<i64>,
    ) -> Result<Response, AppError> {
        resources.storage.remove_favorite(recipe_id).await?;
        let favorites = resources.storage.get_favorites().await?;

        Ok((StatusCode::OK, Json(favorites)).into_response())
    }
}
