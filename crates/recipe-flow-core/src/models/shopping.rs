// ABOUTME: Shopping-list row and display group types
// ABOUTME: AggregatedIngredient carries a formatted amount; IngredientGroup is one rendered block
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use serde::{Deserialize, Serialize};

use crate::constants::view::CHECK_KEY_SEPARATOR;

/// One ingredient row of the shopping or ingredient list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedIngredient {
    /// Ingredient id
    #[serde(rename = "ref")]
    pub reference: String,
    /// Display name
    pub name: String,
    /// Shopping category
    pub category: String,
    /// Scaled amount before unit conversion, `None` for "to taste"
    pub amount: Option<f64>,
    /// Authored unit
    pub unit: Option<String>,
    /// Scaled, converted, rounded amount with unit; empty for "to taste"
    pub display_amount: String,
    /// Declared but never referenced by any step
    pub is_unused: bool,
    /// Sub-recipe the row is listed under
    pub sub_recipe_id: String,
    /// Title of that sub-recipe
    pub sub_recipe_title: String,
}

impl AggregatedIngredient {
    /// Check-state key keyed by display name (`"{subRecipeId}-{name}"`)
    #[must_use]
    pub fn check_key(&self) -> String {
        format!("{}{CHECK_KEY_SEPARATOR}{}", self.sub_recipe_id, self.name)
    }

    /// Clipboard line: `"{displayAmount} {name}"`, or just the name when there is no amount
    #[must_use]
    pub fn clipboard_line(&self) -> String {
        if self.display_amount.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.display_amount, self.name)
        }
    }
}

/// A titled block of ingredient rows rendered together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientGroup {
    /// Sub-recipe id or category id
    pub key: String,
    /// Header text
    pub title: String,
    /// Rows in display order
    pub items: Vec<AggregatedIngredient>,
}

impl IngredientGroup {
    /// Number of rows in the group
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
