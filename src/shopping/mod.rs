// ABOUTME: Shopping-list aggregation and the display structures built from it
// ABOUTME: Exposes aggregate, build_groups, build_columns, and clipboard serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

//! # Shopping List
//!
//! `aggregate` produces flat, formatted rows in display order. The view
//! helpers group those rows, spread the groups over columns, and serialize
//! them for the clipboard. Which rows are checked off is tracked by the
//! caller in a `CheckedIngredients` set.

/// Row aggregation, scaling, and ordering
pub mod aggregator;

/// Grouping, column layout, clipboard text, check state
pub mod view;

pub use aggregator::{
    aggregate, compare_categories, compare_for_shopping, unused_ingredient_ids, AggregateOptions,
};
pub use view::{build_columns, build_groups, copy_to_clipboard, CheckedIngredients};
