// ABOUTME: Main library entry point for the Recipe Flow step-graph transform
// ABOUTME: Turns authored recipe steps into sub-recipes, shopping lists, and formatted amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

#![deny(unsafe_code)]

//! # Recipe Flow
//!
//! A recipe is authored as a flat list of typed steps. Each step names the
//! ingredients or intermediate states it consumes (`uses`) and the state it
//! produces (`produces`). This crate derives everything a recipe viewer needs
//! from that graph.
//!
//! ## Features
//!
//! - **Reference resolution**: every `uses` token is classified as ingredient or state
//! - **Sub-recipes**: steps are partitioned by `subRecipe` tag in first-seen order
//! - **Shopping list**: ingredients deduplicated across the whole recipe
//! - **Scaling and units**: servings ratio plus metric/imperial display
//! - **Validation**: unresolved references and duplicate states reject the recipe
//!
//! ## Architecture
//!
//! Pipeline, leaves first:
//! - **graph**: resolver, step normalizer, sub-recipe grouper, validation
//! - **units**: imperial conversion, scaling, amount formatting
//! - **shopping**: aggregation and column/clipboard view building
//! - **view**: one-call facade plus the memoizing cache
//!
//! ## Example Usage
//!
//! ```rust
//! use recipe_flow::graph::group;
//! use recipe_flow::models::{Ingredient, Recipe, Step};
//!
//! let recipe = Recipe::new("Toast", 1)
//!     .with_ingredient(Ingredient::new("bread", "Bread", Some(2.0), Some("piece")))
//!     .with_step(Step::new("toast", "Toast the bread").using(["bread"]).producing("toast"))
//!     .with_final_state("toast");
//!
//! let sub_recipes = group(&recipe);
//! assert_eq!(sub_recipes.len(), 1);
//! assert_eq!(sub_recipes[0].title, "Toast");
//! ```

/// Step-graph resolution, normalization, grouping, and validation
pub mod graph;

/// ISO-8601 duration parsing and total-time computation
pub mod duration;

/// Unit conversion, scaling, and amount formatting
pub mod units;

/// Shopping-list aggregation and view building
pub mod shopping;

/// One-call view facade and memoizing cache
pub mod view;

/// Recipe JSON loading
pub mod loader;

/// Environment-driven configuration
pub mod config;

/// Logging configuration and structured logging setup
pub mod logging;

/// Re-export of the core crate's constants
pub use recipe_flow_core::constants;

/// Re-export of the core crate's error types
pub use recipe_flow_core::errors;

/// Re-export of the core crate's data models
pub use recipe_flow_core::models;
