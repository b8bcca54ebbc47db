// ABOUTME: SQLite storage backend for persistent pantry, store, and favorite data
// ABOUTME: Wraps a sqlx connection pool with simple CREATE TABLE IF NOT EXISTS migrations
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! SQLite storage implementation
//!
//! Embedded file-based backend for local deployments. Migrations run on
//! connection; ordering of pantry items and stores follows insertion order
//! via rowid.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use super::StorageProvider;
use crate::models::{PantryItem, Store};

/// SQLite storage backend
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist.
        // `mode=rwc` creates the file but not its directory, so the parent
        // is created first (the default URL points at ./data/larder.db).
        let connection_options =
            if database_url.starts_with("sqlite:") && !database_url.contains(":memory:") {
                let path = database_url
                    .trim_start_matches("sqlite:")
                    .trim_start_matches("//");
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent).with_context(|| {
                            format!("failed to create database directory {}", parent.display())
                        })?;
                    }
                }
                format!("{database_url}?mode=rwc")
            } else {
                database_url.to_string()
            };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .with_context(|| format!("failed to open database at {database_url}"))?;

        let storage = Self { pool };
        storage.migrate().await?;

        Ok(storage)
    }

    /// Check whether a user row exists
    async fn user_exists(&self, user_id: Uuid) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM users WHERE id = ?")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}

#[async_trait]
impl StorageProvider for SqliteStorage {
    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS pantry_items (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id),
                name TEXT NOT NULL,
                quantity TEXT NOT NULL,
                expires_at TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_pantry_items_user ON pantry_items(user_id)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS stores (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL REFERENCES users(id),
                name TEXT NOT NULL,
                UNIQUE(user_id, name)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // recipe_id must not be the primary key: an INTEGER PRIMARY KEY is
        // the rowid in SQLite, which would order favorites by id value
        // instead of insertion order.
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS favorites (
                position INTEGER PRIMARY KEY AUTOINCREMENT,
                recipe_id INTEGER UNIQUE NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn bootstrap_user(&self) -> Result<Uuid> {
        let existing = sqlx::query("SELECT id FROM users ORDER BY rowid LIMIT 1")
            .fetch_optional(&self.pool)
            .await?;

        if let Some(row) = existing {
            let id: String = row.try_get("id")?;
            return Uuid::parse_str(&id).with_context(|| format!("invalid user id: {id}"));
        }

        let user_id = Uuid::new_v4();
        sqlx::query("INSERT INTO users (id, username, created_at) VALUES (?, ?, ?)")
            .bind(user_id.to_string())
            .bind("household")
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(user_id)
    }

    async fn get_pantry(&self, user_id: Uuid) -> Result<Option<Vec<PantryItem>>> {
        if !self.user_exists(user_id).await? {
            return Ok(None);
        }

        let rows = sqlx::query(
            "SELECT id, name, quantity, expires_at FROM pantry_items \
             WHERE user_id = ? ORDER BY rowid",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        let mut pantry = Vec::with_capacity(rows.len());
        for row in rows {
            let id: String = row.try_get("id")?;
            let expires_at: Option<DateTime<Utc>> = row.try_get("expires_at")?;
            pantry.push(PantryItem {
                id: Uuid::parse_str(&id).with_context(|| format!("invalid item id: {id}"))?,
                name: row.try_get("name")?,
                quantity: row.try_get("quantity")?,
                expires_at,
            });
        }

        Ok(Some(pantry))
    }

    async fn add_pantry_item(&self, user_id: Uuid, item: &PantryItem) -> Result<Option<()>> {
        if !self.user_exists(user_id).await? {
            return Ok(None);
        }

        sqlx::query(
            "INSERT INTO pantry_items (id, user_id, name, quantity, expires_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(item.id.to_string())
        .bind(user_id.to_string())
        .bind(&item.name)
        .bind(&item.quantity)
        .bind(item.expires_at)
        .execute(&self.pool)
        .await?;

        Ok(Some(()))
    }

    async fn remove_pantry_item(&self, user_id: Uuid, item_id: Uuid) -> Result<Option<()>> {
        if !self.user_exists(user_id).await? {
            return Ok(None);
        }

        sqlx::query("DELETE FROM pantry_items WHERE id = ? AND user_id = ?")
            .bind(item_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(Some(()))
    }

    async fn get_stores(&self, user_id: Uuid) -> Result<Option<Vec<Store>>> {
        if !self.user_exists(user_id).await? {
            return Ok(None);
        }

        let rows = sqlx::query("SELECT id, name FROM stores WHERE user_id = ? ORDER BY rowid")
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await?;

        let mut stores = Vec::with_capacity(rows.len());
        for row in rows {
            let id: String = row.try_get("id")?;
            stores.push(Store {
                id: Uuid::parse_str(&id).with_context(|| format!("invalid store id: {id}"))?,
                name: row.try_get("name")?,
            });
        }

        Ok(Some(stores))
    }

    async fn add_store(&self, user_id: Uuid, store: &Store) -> Result<Option<()>> {
        if !self.user_exists(user_id).await? {
            return Ok(None);
        }

        sqlx::query("INSERT INTO stores (id, user_id, name) VALUES (?, ?, ?)")
            .bind(store.id.to_string())
            .bind(user_id.to_string())
            .bind(&store.name)
            .execute(&self.pool)
            .await?;

        Ok(Some(()))
    }

    async fn remove_store(&self, user_id: Uuid, store_id: Uuid) -> Result<Option<()>> {
        if !self.user_exists(user_id).await? {
            return Ok(None);
        }

        sqlx::query("DELETE FROM stores WHERE id = ? AND user_id = ?")
            .bind(store_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(Some(()))
    }

    async fn get_favorites(&self) -> Result<Vec<i64>> {
        let rows = sqlx::query("SELECT recipe_id FROM favorites ORDER BY position")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| row.try_get::<i64, _>("recipe_id").map_err(Into::into))
            .collect()
    }

    async fn add_favorite(&self, recipe_id: i64) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO favorites (recipe_id) VALUES (?)")
            .bind(recipe_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn remove_favorite(&self, recipe_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM favorites WHERE recipe_id = ?")
            .bind(recipe_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // A pooled :memory: database gives every pooled connection its own empty
    // database, so tests run against a file in a temp directory instead.
    async fn temp_storage() -> (SqliteStorage, TempDir) {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite:{}/larder_test.db", dir.path().display());
        (SqliteStorage::new(&url).await.unwrap(), dir)
    }

    #[tokio::test]
    async fn migrate_and_bootstrap() {
        let (storage, _dir) = temp_storage().await;
        let first = storage.bootstrap_user().await.unwrap();
        let second = storage.bootstrap_user().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn pantry_round_trip() {
        let (storage, _dir) = temp_storage().await;
        let user_id = storage.bootstrap_user().await.unwrap();

        let item = PantryItem::new("olive oil", "250 ml");
        storage
            .add_pantry_item(user_id, &item)
            .await
            .unwrap()
            .unwrap();

        let pantry = storage.get_pantry(user_id).await.unwrap().unwrap();
        assert_eq!(pantry.len(), 1);
        assert_eq!(pantry[0].id, item.id);
        assert_eq!(pantry[0].name, "olive oil");
        assert!(pantry[0].expires_at.is_none());

        storage
            .remove_pantry_item(user_id, item.id)
            .await
            .unwrap()
            .unwrap();
        assert!(storage
            .get_pantry(user_id)
            .await
            .unwrap()
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn unknown_user_yields_none() {
        let (storage, _dir) = temp_storage().await;
        assert!(storage.get_pantry(Uuid::new_v4()).await.unwrap().is_none());
        assert!(storage
            .add_store(Uuid::new_v4(), &Store::new("Market"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_store_name_is_rejected() {
        let (storage, _dir) = temp_storage().await;
        let user_id = storage.bootstrap_user().await.unwrap();

        storage
            .add_store(user_id, &Store::new("Farmers Market"))
            .await
            .unwrap()
            .unwrap();
        let duplicate = storage
            .add_store(user_id, &Store::new("Farmers Market"))
            .await;
        assert!(duplicate.is_err());
    }

    #[tokio::test]
    async fn missing_database_directory_is_created() {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite:{}/nested/data/larder.db", dir.path().display());

        let storage = SqliteStorage::new(&url).await.unwrap();
        let user_id = storage.bootstrap_user().await.unwrap();
        assert!(storage.get_pantry(user_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn favorites_preserve_insertion_order() {
        let (storage, _dir) = temp_storage().await;

        // Insertion order, not id order: a smaller id added later must sort
        // after a larger id added earlier.
        storage.add_favorite(100).await.unwrap();
        storage.add_favorite(1).await.unwrap();
        storage.add_favorite(50).await.unwrap();
        assert_eq!(storage.get_favorites().await.unwrap(), vec![100, 1, 50]);
    }

    #[tokio::test]
    async fn favorites_round_trip() {
        let (storage, _dir) = temp_storage().await;
        storage.add_favorite(42).await.unwrap();
        storage.add_favorite(42).await.unwrap();
        storage.add_favorite(7).await.unwrap();
        assert_eq!(storage.get_favorites().await.unwrap(), vec![42, 7]);

        storage.remove_favorite(42).await.unwrap();
        assert_eq!(storage.get_favorites().await.unwrap(), vec![7]);
    }
}
