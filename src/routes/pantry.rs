// ABOUTME: Route handlers for the pantry REST API
// ABOUTME: List, add, and remove pantry items for the household user

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Pantry routes
//!
//! The pantry is the set of ingredients the household already owns; the
//! shopping-list generator subtracts it from recipe requirements. Mutating
//! endpoints return the full updated pantry so the client can replace its
//! local copy without a follow-up fetch.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{AddPantryItemRequest, MessageResponse, PantryItem};
use crate::server::ServerResources;
use crate::storage::StorageProvider;

/// Pantry routes handler
pub struct PantryRoutes;

impl PantryRoutes {
    /// Create all pantry routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/pantry", get(Self::handle_list))
            .route("/api/pantry", post(Self::handle_add))
            .route("/api/pantry/:item_id", delete(Self::handle_remove))
            .with_state(resources)
    }

    /// Handle GET /api/pantry - List pantry items
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let pantry = resources
            .storage
            .get_pantry(resources.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_user_id(resources.user_id))?;

        Ok((StatusCode::OK, Json(pantry)).into_response())
    }

    /// Handle POST /api/pantry - Add an item, returning the updated pantry
    async fn handle_add(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<AddPantryItemRequest>,
    ) -> Result<Response, AppError> {
        if body.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }

        let mut item = PantryItem::new(body.name.trim(), body.quantity);
        item.expires_at = body.expires_at;

        resources
            .storage
            .add_pantry_item(resources.user_id, &item)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_user_id(resources.user_id))?;

        let pantry = resources
            .storage
            .get_pantry(resources.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_user_id(resources.user_id))?;

        Ok((StatusCode::CREATED, Json(pantry)).into_response())
    }

    /// Handle DELETE /api/pantry/:item_id - Remove an item
    ///
    /// Removing an id that is not in the pantry still succeeds; the delete is
    /// a no-op and the acknowledgement is identical.
    async fn handle_remove(
        State(resources): State<Arc<ServerResources>>,
        Path(item_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        resources
            .storage
            .remove_pantry_item(resources.user_id, item_id)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_user_id(resources.user_id))?;

        Ok((StatusCode::OK, Json(MessageResponse::new("Item deleted"))).into_response())
    }
}
