// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides the liveness probe and a plain-text root banner

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Health check routes
//!
//! The health endpoint reports whether the server is up and whether it is
//! running in mock mode, so the web client can surface a "sample data"
//! banner.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::constants::service;
use crate::server::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_root))
            .route("/api/health", get(Self::handle_health))
            .with_state(resources)
    }

    async fn handle_root() -> &'static str {
        "Larder server is running"
    }

    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "ok": true,
            "service": service::NAME,
            "mock": resources.config.mock_mode,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }
}
