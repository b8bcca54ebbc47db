// ABOUTME: Pantry subtraction for the shopping-list pipeline
// ABOUTME: Removes required items whose full line exactly matches a pantry item name
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Larder

//! Pantry subtraction
//!
//! Filters the consolidated required-item keys against the user's pantry. The
//! comparison is a case-insensitive exact match of the full required line
//! against the pantry item name, not a substring match: a required key like
//! `"1 onion"` will not match a pantry name `"onion"`. Subtraction therefore
//! only takes effect when recipe generation emits bare ingredient names.

use std::collections::HashSet;

use crate::models::PantryItem;

/// Filter out required items already present in the pantry.
///
/// An empty pantry subtracts nothing, so the full required list is returned
/// unchanged (fail-open: better to over-list than silently drop needed
/// items). The output preserves the input order.
#[must_use]
pub fn subtract_pantry<'a, I>(required: I, pantry: &[PantryItem]) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let owned: HashSet<String> = pantry.iter().map(|item| item.name.to_lowercase()).collect();

    required
        .into_iter()
        .filter(|key| !owned.contains(*key))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pantry_keeps_everything() {
        let items = subtract_pantry(["onion", "2 eggs"], &[]);
        assert_eq!(items, vec!["onion", "2 eggs"]);
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let pantry = vec![PantryItem::new("Olive Oil", "250 ml")];
        let items = subtract_pantry(["olive oil", "flour"], &pantry);
        assert_eq!(items, vec!["flour"]);
    }

    #[test]
    fn quantity_prefixed_lines_are_not_subtracted() {
        // "2 onions" is compared as the full raw line, so a pantry "onion"
        // does not remove it.
        let pantry = vec![PantryItem::new("onion", "2")];
        let items = subtract_pantry(["2 onions"], &pantry);
        assert_eq!(items, vec!["2 onions"]);
    }

    #[test]
    fn order_is_preserved() {
        let pantry = vec![PantryItem::new("salt", "1 box")];
        let items = subtract_pantry(["flour", "salt", "sugar"], &pantry);
        assert_eq!(items, vec!["flour", "sugar"]);
    }
}
