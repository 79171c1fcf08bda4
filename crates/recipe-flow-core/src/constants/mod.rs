// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversion factors, ingredient category ordering, and view defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// Ingredient category ordering for the shopping list
pub mod categories;

/// Sub-recipe grouping defaults
pub mod sub_recipes {
    /// Group id for steps without a `subRecipe` tag
    pub const MAIN_SUB_RECIPE_ID: &str = "main";
    /// Title used for the main group when the recipe has no title
    pub const DEFAULT_RECIPE_TITLE: &str = "Recipe";
}

/// Shopping-list view defaults
pub mod view {
    /// Default number of ingredient columns
    pub const DEFAULT_COLUMN_COUNT: usize = 3;
    /// Default capacity of the memoized recipe-view cache
    pub const DEFAULT_VIEW_CACHE_CAPACITY: usize = 64;
    /// Separator between sub-recipe id and ingredient name in check-state keys
    pub const CHECK_KEY_SEPARATOR: char = '-';
}

/// Duration display constants
pub mod durations {
    /// Displayed durations are rounded to this many minutes
    pub const DISPLAY_ROUNDING_MINUTES: u32 = 5;
    /// Minutes in an hour
    pub const MINUTES_PER_HOUR: u32 = 60;
    /// Minutes in a day
    pub const MINUTES_PER_DAY: u32 = 1_440;
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the command-line front end
    pub const RECIPE_FLOW: &str = "recipe-flow";
}
