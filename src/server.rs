// ABOUTME: HTTP server assembly, wiring routes, middleware, and shared resources
// ABOUTME: Owns the storage backend and serves the REST API on the configured port

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Server setup and lifecycle
//!
//! [`ServerResources`] bundles everything the route handlers need behind a
//! single `Arc`, so handlers receive one state value instead of a parameter
//! list. [`LarderServer`] assembles the router and runs it to completion.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

use crate::config::environment::ServerConfig;
use crate::constants::defaults;
use crate::middleware::setup_cors;
use crate::routes::{
    FavoritesRoutes, HealthRoutes, MealPlanRoutes, PantryRoutes, ShoppingListRoutes, StoresRoutes,
};
use crate::storage::{Storage, StorageProvider};

/// Shared resources for all route handlers
///
/// Handlers address storage through the bootstrapped household profile;
/// multi-account support would replace `user_id` with per-request
/// authentication.
pub struct ServerResources {
    pub storage: Storage,
    pub config: ServerConfig,
    pub user_id: Uuid,
}

impl ServerResources {
    /// Bundle storage and configuration, bootstrapping the household profile
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be read or created
    pub async fn new(storage: Storage, config: ServerConfig) -> Result<Self> {
        let user_id = storage
            .bootstrap_user()
            .await
            .context("failed to bootstrap household user profile")?;

        Ok(Self {
            storage,
            config,
            user_id,
        })
    }
}

/// The Larder HTTP server
pub struct LarderServer {
    resources: Arc<ServerResources>,
}

impl LarderServer {
    /// Create a server from configuration, selecting and migrating storage
    ///
    /// # Errors
    ///
    /// Returns an error if storage initialization fails
    pub async fn new(config: ServerConfig) -> Result<Self> {
        let storage = Storage::from_config(&config).await?;
        info!("Storage backend ready: {}", storage.backend_info());

        let resources = Arc::new(ServerResources::new(storage, config).await?);
        Ok(Self { resources })
    }

    /// Create a server around already-initialized resources
    #[must_use]
    pub const fn from_resources(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Assemble the full application router with middleware layers
    #[must_use]
    pub fn router(&self) -> Router {
        let resources = &self.resources;
        Router::new()
            .merge(HealthRoutes::routes(resources.clone()))
            .merge(PantryRoutes::routes(resources.clone()))
            .merge(StoresRoutes::routes(resources.clone()))
            .merge(FavoritesRoutes::routes(resources.clone()))
            .merge(MealPlanRoutes::routes(resources.clone()))
            .merge(ShoppingListRoutes::routes(resources.clone()))
            .layer(RequestBodyLimitLayer::new(defaults::MAX_BODY_BYTES))
            .layer(setup_cors(&resources.config))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails
    pub async fn run(self) -> Result<()> {
        let port = self.resources.config.http_port;
        let addr = format!("{}:{port}", defaults::HOST);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        info!("HTTP server listening on http://{addr}");
        axum::serve(listener, self.router())
            .await
            .context("HTTP server terminated unexpectedly")?;

        Ok(())
    }
}
