// ABOUTME: HTTP route handlers for the Larder REST API
// ABOUTME: One module per resource, each exposing a Routes struct with an axum Router

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Route handlers for the Larder HTTP API
//!
//! Each module owns one resource and exposes a `*Routes` struct whose
//! `routes()` constructor returns an axum `Router` wired to the shared
//! [`ServerResources`](crate::server::ServerResources) state.

pub mod favorites;
pub mod health;
pub mod mealplan;
pub mod pantry;
pub mod shopping_list;
pub mod stores;

pub use favorites::FavoritesRoutes;
pub use health::HealthRoutes;
pub use mealplan::MealPlanRoutes;
pub use pantry::PantryRoutes;
pub use shopping_list::ShoppingListRoutes;
pub use stores::StoresRoutes;
