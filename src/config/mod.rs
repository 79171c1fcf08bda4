// ABOUTME: Configuration module for recipe view defaults
// ABOUTME: Loads unit system, layout, and cache settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

//! Configuration
//!
//! The transform itself takes every display choice as an explicit argument.
//! This module only supplies defaults for callers such as the CLI:
//!
//! - `RECIPE_UNIT_SYSTEM`: `metric` (default) or `imperial`
//! - `RECIPE_COLUMN_COUNT`: ingredient columns, default 3
//! - `RECIPE_VIEW_CACHE_CAPACITY`: memoized views, default 64
//! - `RECIPE_SHOPPING_MODE`: `true`/`1` to group by category

/// Recipe view defaults
pub mod view;

pub use view::{
    ViewConfig, CACHE_CAPACITY_ENV, COLUMN_COUNT_ENV, SHOPPING_MODE_ENV, UNIT_SYSTEM_ENV,
};
