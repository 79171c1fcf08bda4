// ABOUTME: One-call recipe view: sub-recipes, formatted ingredients, groups, and columns
// ABOUTME: Pure function of (recipe, unit system, servings, shopping mode, columns)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

//! # Recipe View
//!
//! `build_view` runs the whole pipeline for a presentation layer that wants
//! one object per render. `RecipeViewCache` memoizes it.

/// LRU memoization of built views
pub mod cache;

use serde::Serialize;
use tracing::debug;

use crate::config::ViewConfig;
use crate::duration::{total_time, TimeSummary};
use crate::graph::group;
use crate::models::{
    AggregatedIngredient, GroupBy, IngredientGroup, Recipe, SubRecipe, UnitSystem,
};
use crate::shopping::{aggregate, build_columns, build_groups, AggregateOptions};

pub use cache::{CacheStats, RecipeViewCache, ViewKey};

/// Display choices for one view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewRequest {
    /// Unit system amounts are rendered in
    pub unit_system: UnitSystem,
    /// Desired servings; `None` keeps the recipe's own
    pub servings: Option<u32>,
    /// Group ingredients by category instead of sub-recipe
    pub shopping_mode: bool,
    /// Number of ingredient columns
    pub column_count: usize,
}

impl Default for ViewRequest {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}

impl ViewRequest {
    /// Request using configured defaults and the recipe's own servings
    #[must_use]
    pub const fn from_config(config: &ViewConfig) -> Self {
        Self {
            unit_system: config.unit_system,
            servings: None,
            shopping_mode: config.shopping_mode,
            column_count: config.column_count,
        }
    }

    /// Set desired servings
    #[must_use]
    pub const fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Set the unit system
    #[must_use]
    pub const fn with_unit_system(mut self, unit_system: UnitSystem) -> Self {
        self.unit_system = unit_system;
        self
    }

    /// Toggle shopping mode
    #[must_use]
    pub const fn with_shopping_mode(mut self, shopping_mode: bool) -> Self {
        self.shopping_mode = shopping_mode;
        self
    }

    /// Grouping implied by the shopping-mode flag
    #[must_use]
    pub const fn group_by(&self) -> GroupBy {
        GroupBy::for_shopping_mode(self.shopping_mode)
    }

    /// Servings the view is rendered for
    #[must_use]
    pub fn effective_servings(&self, recipe: &Recipe) -> u32 {
        self.servings.unwrap_or(recipe.metadata.servings)
    }
}

/// Everything a recipe screen renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    /// Recipe title
    pub title: String,
    /// Servings the amounts are scaled to
    pub servings: u32,
    /// Unit system of every display amount
    pub unit_system: UnitSystem,
    /// Ordered sub-recipes
    pub sub_recipes: Vec<SubRecipe>,
    /// Formatted ingredient rows in display order
    pub ingredients: Vec<AggregatedIngredient>,
    /// Rows grouped by sub-recipe or category
    pub groups: Vec<IngredientGroup>,
    /// Groups distributed into columns
    pub columns: Vec<Vec<IngredientGroup>>,
    /// Active and passive time
    pub time: TimeSummary,
}

/// Build the full view of a recipe
#[must_use]
pub fn build_view(recipe: &Recipe, request: &ViewRequest) -> RecipeView {
    let group_by = request.group_by();
    let options = AggregateOptions {
        unit_system: request.unit_system,
        servings: request.servings,
        group_by,
    };

    let ingredients = aggregate(recipe, &options);
    let groups = build_groups(&ingredients, group_by);
    let columns = build_columns(&groups, request.column_count);

    debug!(
        recipe = %recipe.metadata.title,
        groups = groups.len(),
        columns = columns.len(),
        "Built recipe view"
    );

    RecipeView {
        title: recipe.metadata.title.clone(),
        servings: request.effective_servings(recipe),
        unit_system: request.unit_system,
        sub_recipes: group(recipe),
        ingredients,
        groups,
        columns,
        time: total_time(recipe),
    }
}
