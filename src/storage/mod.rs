// ABOUTME: Storage abstraction layer for the Larder server
// ABOUTME: Plugin architecture with SQLite and in-memory backends selected by configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Storage abstraction for user profiles, pantries, stores, and favorites.
//!
//! The original design kept mock state in module-level arrays; here it is an
//! injected repository with swappable backing: a persistent SQLite backend
//! and an in-memory backend used in mock mode, chosen by configuration.

use crate::models::{PantryItem, Store};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

pub mod factory;
pub mod memory;
pub mod sqlite;

pub use factory::Storage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

/// Core storage abstraction trait
///
/// All storage implementations must implement this trait to provide
/// a consistent interface for the application layer.
///
/// Methods returning `Result<Option<_>>` yield `None` when the addressed
/// user profile does not exist; callers surface that as a not-found error.
#[async_trait]
pub trait StorageProvider: Send + Sync + Clone {
    /// Run migrations / set up backing state
    async fn migrate(&self) -> Result<()>;

    /// Get or create the household user profile and return its id
    async fn bootstrap_user(&self) -> Result<Uuid>;

    // ================================
    // Pantry
    // ================================

    /// Get all pantry items for a user
    async fn get_pantry(&self, user_id: Uuid) -> Result<Option<Vec<PantryItem>>>;

    /// Add an item to a user's pantry
    async fn add_pantry_item(&self, user_id: Uuid, item: &PantryItem) -> Result<Option<()>>;

    /// Remove an item from a user's pantry; removing an unknown item is a no-op
    async fn remove_pantry_item(&self, user_id: Uuid, item_id: Uuid) -> Result<Option<()>>;

    // ================================
    // Stores
    // ================================

    /// Get all custom stores for a user
    async fn get_stores(&self, user_id: Uuid) -> Result<Option<Vec<Store>>>;

    /// Add a store to a user's list; store names are unique per user
    async fn add_store(&self, user_id: Uuid, store: &Store) -> Result<Option<()>>;

    /// Remove a store; removing an unknown store is a no-op
    async fn remove_store(&self, user_id: Uuid, store_id: Uuid) -> Result<Option<()>>;

    // ================================
    // Favorites
    // ================================

    /// Get all favorited recipe ids
    async fn get_favorites(&self) -> Result<Vec<i64>>;

    /// Add a favorite recipe id; duplicates are ignored
    async fn add_favorite(&self, recipe_id: i64) -> Result<()>;

    /// Remove a favorite recipe id; removing an unknown id is a no-op
    async fn remove_favorite(&self, recipe_id: i64) -> Result<()>;
}
