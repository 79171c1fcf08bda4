// ABOUTME: Ingredient category constants used to order the shopping list
// ABOUTME: Fixed aisle-like priority with "other" as the catch-all category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

/// Catch-all category for ingredients without one
pub const OTHER: &str = "other";

/// Shopping-list category priority, first to last
pub const CATEGORY_ORDER: &[&str] = &[
    "meat",
    "poultry",
    "seafood",
    "produce",
    "dairy",
    "egg",
    "pantry",
    "spice",
    "condiment",
    "beverage",
    OTHER,
];

/// Position of a category in [`CATEGORY_ORDER`], `None` for unknown categories
#[must_use]
pub fn category_rank(category: &str) -> Option<usize> {
    CATEGORY_ORDER.iter().position(|known| *known == category)
}

/// Human-readable label for a category header (`"dry-goods"` becomes `"Dry goods"`)
#[must_use]
pub fn category_label(category: &str) -> String {
    let spaced = category.replace('-', " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
