// ABOUTME: Shopping-list generation pipeline: consolidation, pantry subtraction, categorization
// ABOUTME: Pure synchronous core invoked once per generate request with no side effects
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! # Shopping-List Engine
//!
//! The data-transformation core of the Larder server. Recipes flow through a
//! single-pass pipeline: ingredient lines are consolidated into a unique-keyed
//! count map, items already in the pantry are subtracted, and the remainder is
//! bucketed into display categories.
//!
//! The pipeline is a pure function of its two inputs (recipes, pantry
//! snapshot); it holds no state between invocations and never persists its
//! output.

pub mod categorize;
pub mod consolidate;
pub mod subtract;

pub use categorize::{categorize_item, group_items};
pub use consolidate::ConsolidatedIngredients;
pub use subtract::subtract_pantry;

use crate::models::{GroupedShoppingList, PantryItem, Recipe};

/// Generate a grouped shopping list from the given recipes and pantry snapshot.
///
/// Every unique ingredient line across all recipes lands in exactly one
/// category of the output, unless its lower-cased form exactly matches a
/// pantry item name. An empty pantry subtracts nothing, so the full
/// consolidated list is returned (fail-open).
#[must_use]
pub fn generate_shopping_list(recipes: &[Recipe], pantry: &[PantryItem]) -> GroupedShoppingList {
    let required = ConsolidatedIngredients::from_recipes(recipes);
    let items_to_buy = subtract_pantry(required.unique_items(), pantry);
    group_items(&items_to_buy)
}
