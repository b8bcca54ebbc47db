// ABOUTME: Common data models for recipes, pantry items, stores, and shopping lists
// ABOUTME: Request/response payload definitions shared by the routes and storage layers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Core data models for the Larder server

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::categories;
use crate::errors::AppError;

/// A recipe as produced by the meal-plan generator and consumed by the
/// shopping-list pipeline.
///
/// Ingredient lines are free-text strings combining quantity, unit, and name
/// (e.g. `"1 tbsp olive oil"`); no structured parsing is applied to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub calories: String,
    #[serde(default)]
    pub category: String,
    /// Free-text ingredient lines; the only field the shopping-list core reads
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub image: String,
}

/// A single item in a user's pantry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: String,
    /// Optional expiry date, used by meal planning to prioritize ingredients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl PantryItem {
    /// Create a new pantry item with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity: quantity.into(),
            expires_at: None,
        }
    }
}

/// A user-defined store grouping for the shopping list screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: Uuid,
    /// Store name, unique per user
    pub name: String,
}

impl Store {
    /// Create a new store with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Coarse display buckets for the generated shopping list.
///
/// Declaration order matches the display order of the original client:
/// Produce first, Miscellaneous last.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum ShoppingCategory {
    Produce,
    Meat,
    Pantry,
    Miscellaneous,
}

impl ShoppingCategory {
    /// Category name as it appears in API responses
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Produce => categories::PRODUCE,
            Self::Meat => categories::MEAT,
            Self::Pantry => categories::PANTRY,
            Self::Miscellaneous => categories::MISCELLANEOUS,
        }
    }
}

impl Display for ShoppingCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShoppingCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            categories::PRODUCE => Ok(Self::Produce),
            categories::MEAT => Ok(Self::Meat),
            categories::PANTRY => Ok(Self::Pantry),
            categories::MISCELLANEOUS => Ok(Self::Miscellaneous),
            _ => Err(AppError::invalid_input(format!(
                "Invalid shopping category: {s}"
            ))),
        }
    }
}

/// A single line of the generated shopping list.
///
/// The `id` is positional within its category (`Produce-0`, `Produce-1`, ...)
/// and is regenerated on every request; the `quantity` field is always empty
/// at this stage since line-item quantities are not parsed or merged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingListEntry {
    pub id: String,
    pub name: String,
    pub quantity: String,
}

/// Generated shopping list grouped by category; empty categories are omitted
pub type GroupedShoppingList = BTreeMap<ShoppingCategory, Vec<ShoppingListEntry>>;

/// Request body for `POST /api/shoppinglist/generate`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateShoppingListRequest {
    /// Recipes whose ingredients feed the pipeline; absence is a client error
    #[serde(default)]
    pub recipes: Option<Vec<Recipe>>,
}

/// Request body for adding a pantry item
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPantryItemRequest {
    pub name: String,
    pub quantity: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Request body for adding a store
#[derive(Debug, Clone, Deserialize)]
pub struct AddStoreRequest {
    pub name: String,
}

/// Request body for adding a favorite recipe
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    /// Absence is a client error, reported as 400
    #[serde(default)]
    pub recipe_id: Option<i64>,
}

/// Request body for meal-plan generation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealPlanRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Simple acknowledgement payload for delete operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
