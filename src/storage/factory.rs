// ABOUTME: Storage factory selecting a backend from server configuration
// ABOUTME: Wraps the SQLite and in-memory backends behind a single delegating enum

// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Storage backend factory
//!
//! Mock mode gets a seeded in-memory backend; everything else runs on SQLite.
//! Callers hold a `Storage` value and never know which backend is live.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::{MemoryStorage, SqliteStorage, StorageProvider};
use crate::config::environment::ServerConfig;
use crate::models::{PantryItem, Store};

/// Unified storage interface that dispatches to the configured backend
#[derive(Clone)]
pub enum Storage {
    Memory(MemoryStorage),
    Sqlite(SqliteStorage),
}

impl Storage {
    /// Create a storage backend from server configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the SQLite connection or migration fails
    pub async fn from_config(config: &ServerConfig) -> Result<Self> {
        if config.mock_mode {
            info!("Using in-memory storage (mock mode)");
            return Ok(Self::Memory(MemoryStorage::seeded()));
        }

        let url = config.database.url.to_connection_string();
        info!("Using SQLite storage at {url}");
        let storage = SqliteStorage::new(&url).await?;
        Ok(Self::Sqlite(storage))
    }

    /// Human-readable backend name for startup logging
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "in-memory",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

#[async_trait]
impl StorageProvider for Storage {
    async fn migrate(&self) -> Result<()> {
        match self {
            Self::Memory(storage) => storage.migrate().await,
            Self::Sqlite(storage) => storage.migrate().await,
        }
    }

    async fn bootstrap_user(&self) -> Result<Uuid> {
        match self {
            Self::Memory(storage) => storage.bootstrap_user().await,
            Self::Sqlite(storage) => storage.bootstrap_user().await,
        }
    }

    async fn get_pantry(&self, user_id: Uuid) -> Result<Option<Vec<PantryItem>>> {
        match self {
            Self::Memory(storage) => storage.get_pantry(user_id).await,
            Self::Sqlite(storage) => storage.get_pantry(user_id).await,
        }
    }

    async fn add_pantry_item(&self, user_id: Uuid, item: &PantryItem) -> Result<Option<()>> {
        match self {
            Self::Memory(storage) => storage.add_pantry_item(user_id, item).await,
            Self::Sqlite(storage) => storage.add_pantry_item(user_id, item).await,
        }
    }

    async fn remove_pantry_item(&self, user_id: Uuid, item_id: Uuid) -> Result<Option<()>> {
        match self {
            Self::Memory(storage) => storage.remove_pantry_item(user_id, item_id).await,
            Self::Sqlite(storage) => storage.remove_pantry_item(user_id, item_id).await,
        }
    }

    async fn get_stores(&self, user_id: Uuid) -> Result<Option<Vec<Store>>> {
        match self {
            Self::Memory(storage) => storage.get_stores(user_id).await,
            Self::Sqlite(storage) => storage.get_stores(user_id).await,
        }
    }

    async fn add_store(&self, user_id: Uuid, store: &Store) -> Result<Option<()>> {
        match self {
            Self::Memory(storage) => storage.add_store(user_id, store).await,
            Self::Sqlite(storage) => storage.add_store(user_id, store).await,
        }
    }

    async fn remove_store(&self, user_id: Uuid, store_id: Uuid) -> Result<Option<()>> {
        match self {
            Self::Memory(storage) => storage.remove_store(user_id, store_id).await,
            Self::Sqlite(storage) => storage.remove_store(user_id, store_id).await,
        }
    }

    async fn get_favorites(&self) -> Result<Vec<i64>> {
        match self {
            Self::Memory(storage) => storage.get_favorites().await,
            Self::Sqlite(storage) => storage.get_favorites().await,
        }
    }

    async fn add_favorite(&self, recipe_id: i64) -> Result<()> {
        match self {
            Self::Memory(storage) => storage.add_favorite(recipe_id).await,
            Self::Sqlite(storage) => storage.add_favorite(recipe_id).await,
        }
    }

    async fn remove_favorite(&self, recipe_id: i64) -> Result<()> {
        match self {
            Self::Memory(storage) => storage.remove_favorite(recipe_id).await,
            Self::Sqlite(storage) => storage.remove_favorite(recipe_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::{DatabaseConfig, DatabaseUrl};
    use tempfile::TempDir;

    #[tokio::test]
    async fn mock_mode_selects_seeded_memory_backend() {
        let config = ServerConfig {
            mock_mode: true,
            ..ServerConfig::default()
        };
        let storage = Storage::from_config(&config).await.unwrap();
        assert_eq!(storage.backend_info(), "in-memory");

        let user_id = storage.bootstrap_user().await.unwrap();
        let pantry = storage.get_pantry(user_id).await.unwrap().unwrap();
        assert_eq!(pantry.len(), 3);
    }

    #[tokio::test]
    async fn default_mode_selects_sqlite_backend() {
        let dir = TempDir::new().unwrap();
        let config = ServerConfig {
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&format!(
                    "sqlite:{}/factory_test.db",
                    dir.path().display()
                )),
                auto_migrate: true,
            },
            ..ServerConfig::default()
        };
        let storage = Storage::from_config(&config).await.unwrap();
        assert_eq!(storage.backend_info(), "sqlite");

        let user_id = storage.bootstrap_user().await.unwrap();
        assert!(storage.get_pantry(user_id).await.unwrap().unwrap().is_empty());
    }
}
