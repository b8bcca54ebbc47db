// ABOUTME: Main library entry point for the Larder meal-planning server
// ABOUTME: Provides the REST API, shopping-list engine, and storage backends

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

#![deny(unsafe_code)]

//! # Larder Server
//!
//! Backend for the Larder household meal-planning and grocery app. The heart
//! of the server is the shopping-list pipeline: ingredient lines from the
//! selected recipes are consolidated, the household pantry is subtracted,
//! and the remainder is grouped into store-aisle categories.
//!
//! ## Features
//!
//! - **Shopping lists**: Consolidate, subtract, and categorize recipe
//!   ingredients against the stored pantry
//! - **Pantry tracking**: CRUD for the ingredients the household owns
//! - **Stores and favorites**: User-defined store groupings and a favorite
//!   recipe list
//! - **Meal plans**: Deterministic sample generation in mock mode
//! - **Swappable storage**: SQLite for persistence, in-memory for mock mode
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use larder_server::config::environment::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Larder server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the server binary (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access
// them.

/// Configuration management and environment parsing
pub mod config;

/// Application-wide constants and keyword tables
pub mod constants;

/// Unified error handling with standard error codes
pub mod errors;

/// Structured logging initialization
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Common data models for recipes, pantry items, stores, and shopping lists
pub mod models;

/// `HTTP` route handlers for the REST API
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Shopping-list generation pipeline
pub mod shopping;

/// Storage abstraction with SQLite and in-memory backends
pub mod storage;
