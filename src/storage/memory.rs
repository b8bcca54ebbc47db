// ABOUTME: In-memory storage backend used in mock mode and tests
// ABOUTME: Holds pantry, store, and favorite state for the process lifetime only
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! In-memory storage implementation
//!
//! Backs mock mode with process-lifetime state. The seeded variant carries the
//! starter pantry the original mock server shipped with (onion, garlic, olive
//! oil) so a fresh instance produces a meaningful shopping list immediately.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::StorageProvider;
use crate::models::{PantryItem, Store};

#[derive(Debug, Default)]
struct UserState {
    pantry: Vec<PantryItem>,
    stores: Vec<Store>,
}

#[derive(Debug, Default)]
struct MemoryState {
    users: HashMap<Uuid, UserState>,
    favorites: Vec<i64>,
}

/// In-memory storage backend
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<RwLock<MemoryState>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory store seeded with the starter pantry
    #[must_use]
    pub fn seeded() -> Self {
        let mut state = MemoryState::default();
        state.users.insert(
            Uuid::new_v4(),
            UserState {
                pantry: vec![
                    PantryItem::new("onion", "2"),
                    PantryItem::new("garlic", "3 cloves"),
                    PantryItem::new("olive oil", "250 ml"),
                ],
                stores: Vec::new(),
            },
        );
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn migrate(&self) -> Result<()> {
        Ok(())
    }

    async fn bootstrap_user(&self) -> Result<Uuid> {
        let mut state = self.inner.write().await;
        if let Some(user_id) = state.users.keys().next().copied() {
            return Ok(user_id);
        }
        let user_id = Uuid::new_v4();
        state.users.insert(user_id, UserState::default());
        Ok(user_id)
    }

    async fn get_pantry(&self, user_id: Uuid) -> Result<Option<Vec<PantryItem>>> {
        let state = self.inner.read().await;
        Ok(state.users.get(&user_id).map(|user| user.pantry.clone()))
    }

    async fn add_pantry_item(&self, user_id: Uuid, item: &PantryItem) -> Result<Option<()>> {
        let mut state = self.inner.write().await;
        Ok(state.users.get_mut(&user_id).map(|user| {
            user.pantry.push(item.clone());
        }))
    }

    async fn remove_pantry_item(&self, user_id: Uuid, item_id: Uuid) -> Result<Option<()>> {
        let mut state = self.inner.write().await;
        Ok(state.users.get_mut(&user_id).map(|user| {
            user.pantry.retain(|item| item.id != item_id);
        }))
    }

    async fn get_stores(&self, user_id: Uuid) -> Result<Option<Vec<Store>>> {
        let state = self.inner.read().await;
        Ok(state.users.get(&user_id).map(|user| user.stores.clone()))
    }

    async fn add_store(&self, user_id: Uuid, store: &Store) -> Result<Option<()>> {
        let mut state = self.inner.write().await;
        Ok(state.users.get_mut(&user_id).map(|user| {
            user.stores.push(store.clone());
        }))
    }

    async fn remove_store(&self, user_id: Uuid, store_id: Uuid) -> Result<Option<()>> {
        let mut state = self.inner.write().await;
        Ok(state.users.get_mut(&user_id).map(|user| {
            user.stores.retain(|store| store.id != store_id);
        }))
    }

    async fn get_favorites(&self) -> Result<Vec<i64>> {
        let state = self.inner.read().await;
        Ok(state.favorites.clone())
    }

    async fn add_favorite(&self, recipe_id: i64) -> Result<()> {
        let mut state = self.inner.write().await;
        if !state.favorites.contains(&recipe_id) {
            state.favorites.push(recipe_id);
        }
        Ok(())
    }

    async fn remove_favorite(&self, recipe_id: i64) -> Result<()> {
        let mut state = self.inner.write().await;
        state.favorites.retain(|id| *id != recipe_id);
        Ok(())
    }
}
