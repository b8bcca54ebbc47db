// ABOUTME: Route handlers for the custom stores REST API
// ABOUTME: List, add, and remove user-defined store groupings

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Store routes
//!
//! Stores are user-defined groupings shown on the shopping-list screen
//! (e.g. "Farmers Market", "Costco"). Names are unique per user; adding a
//! duplicate is a conflict rather than a silent second entry.

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
use crate::models::{AddStoreRequest, MessageResponse, Store};
use crate::server::ServerResources;
use crate::storage::StorageProvider;

/// Store routes handler
pub struct StoresRoutes;

impl StoresRoutes {
    /// Create all store routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/stores", get(Self::handle_list))
            .route("/api/stores", post(Self::handle_add))
            .route("/api/stores/:store_id", delete(Self::handle_remove))
            .with_state(resources)
    }

    /// Handle GET /api/stores - List stores
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let stores = resources
            .storage
            .get_stores(resources.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_user_id(resources.user_id))?;

        Ok((StatusCode::OK, Json(stores)).into_response())
    }

    /// Handle POST /api/stores - Add a store, returning the updated list
    async fn handle_add(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<AddStoreRequest>,
    ) -> Result<Response, AppError> {
        let name = body.name.trim();
        if name.is_empty() {
            return Err(AppError::missing_field("name"));
        }

        let stores = resources
            .storage
            .get_stores(resources.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_user_id(resources.user_id))?;

        // Uniqueness is checked here rather than left to the backend so both
        // backends report the same conflict.
        if stores
            .iter()
            .any(|store| store.name.eq_ignore_ascii_case(name))
        {
            return Err(AppError::already_exists(format!("Store '{name}'")));
        }

        let store = Store::new(name);
        resources
            .storage
            .add_store(resources.user_id, &store)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_user_id(resources.user_id))?;

        let stores = resources
            .storage
            .get_stores(resources.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_user_id(resources.user_id))?;

        Ok((StatusCode::CREATED, Json(stores)).into_response())
    }

    /// Handle DELETE /api/stores/:store_id - Remove a store
    async fn handle_remove(
        State(resources): State<Arc<ServerResources>>,
        Path(store_id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        resources
            .storage
            .remove_store(resources.user_id, store_id)
            .await?
            .ok_or_else(|| AppError::not_found("User").with_user_id(resources.user_id))?;

        Ok((StatusCode::OK, Json(MessageResponse::new("Store deleted"))).into_response())
    }
}
