// ABOUTME: Keyword-based categorization of items-to-buy into display buckets
// ABOUTME: Ordered first-match-wins rules with positional id synthesis per category
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Shopping-list categorization
//!
//! Each item-to-buy is tested against an ordered list of (category, keywords)
//! rules and assigned to the first bucket with a matching keyword. Matching is
//! substring-based on the already lower-cased line, so an item like
//! "flourless cake mix" matches the Pantry keyword "flour" and is
//! mis-bucketed; that heuristic limitation is accepted for v1.

use std::collections::BTreeMap;

use crate::constants::keywords;
use crate::models::{GroupedShoppingList, ShoppingCategory, ShoppingListEntry};

/// Categorization rules, evaluated top to bottom; the first matching rule
/// wins. Meat before Produce before Pantry, so "garlic chicken" lands in
/// Meat.
const RULES: &[(ShoppingCategory, &[&str])] = &[
    (ShoppingCategory::Meat, keywords::MEAT),
    (ShoppingCategory::Produce, keywords::PRODUCE),
    (ShoppingCategory::Pantry, keywords::PANTRY),
];

/// Assign a single item to its shopping category.
///
/// Items matching no rule fall through to Miscellaneous.
#[must_use]
pub fn categorize_item(item: &str) -> ShoppingCategory {
    RULES
        .iter()
        .find(|(_, words)| words.iter().any(|word| item.contains(word)))
        .map_or(ShoppingCategory::Miscellaneous, |(category, _)| *category)
}

/// Group items-to-buy by category, preserving input order within each bucket.
///
/// Output entries carry a positional id (`Produce-0`, `Produce-1`, ...) that
/// is unique within its category but not stable across regenerations, and an
/// empty `quantity`. Categories with no items are omitted entirely.
#[must_use]
pub fn group_items(items: &[String]) -> GroupedShoppingList {
    let mut buckets: BTreeMap<ShoppingCategory, Vec<&str>> = BTreeMap::new();
    for item in items {
        buckets
            .entry(categorize_item(item))
            .or_default()
            .push(item);
    }

    buckets
        .into_iter()
        .map(|(category, names)| {
            let entries = names
                .into_iter()
                .enumerate()
                .map(|(index, name)| ShoppingListEntry {
                    id: format!("{category}-{index}"),
                    name: name.to_owned(),
                    quantity: String::new(),
                })
                .collect();
            (category, entries)
        })
        .collect()
}
