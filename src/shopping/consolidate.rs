// ABOUTME: Ingredient consolidation across recipes into a unique-keyed occurrence count map
// ABOUTME: Normalization is lower-casing of the full line; no quantity or unit parsing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Ingredient consolidation
//!
//! Flattens the ingredient lines of every recipe into one sequence and folds
//! them into a mapping from normalized key to occurrence count. The key is the
//! lower-cased full line, so `"1 onion"` and `"2 onions"` remain distinct
//! entries. That is a deliberate v1 limitation of the string-based ingredient
//! representation, not a bug.

use std::collections::HashMap;

use crate::models::Recipe;

/// The consolidated required-item set for one shopping-list request.
///
/// Ephemeral: rebuilt on every generation request, never persisted. Keys are
/// unique by construction and iteration follows first-occurrence order across
/// the flattened ingredient sequence.
#[derive(Debug, Default)]
pub struct ConsolidatedIngredients {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl ConsolidatedIngredients {
    /// Consolidate the ingredient lines of all given recipes.
    ///
    /// An empty recipe slice yields an empty mapping.
    #[must_use]
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        let mut consolidated = Self::default();
        for line in recipes.iter().flat_map(|recipe| &recipe.ingredients) {
            consolidated.add_line(line);
        }
        consolidated
    }

    /// Fold a single ingredient line into the mapping
    fn add_line(&mut self, line: &str) {
        let key = line.to_lowercase();
        match self.counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.clone(), 1);
                self.order.push(key);
            }
        }
    }

    /// Restartable view over the unique normalized keys, in first-occurrence
    /// order. Each call starts a fresh iteration.
    pub fn unique_items(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Occurrence count for a normalized key, zero if absent.
    ///
    /// Counts are computed during consolidation but not currently propagated
    /// to the subtraction or categorization stages.
    #[must_use]
    pub fn count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of unique keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no ingredient lines were consolidated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
