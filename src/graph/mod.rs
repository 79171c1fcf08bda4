// ABOUTME: Step-graph pipeline: resolve references, normalize steps, group sub-recipes
// ABOUTME: Also hosts whole-recipe structural validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

//! # Recipe Step Graph
//!
//! Steps form a graph through their `uses` and `produces` fields. This module
//! turns that graph into display structures:
//!
//! - `resolver`: classifies each `uses` token as ingredient or state
//! - `normalizer`: builds a `NormalizedStep` per authored step
//! - `grouper`: partitions steps into `SubRecipe`s in first-seen order
//! - `validation`: reports unresolved references and duplicate states
//! - `progress`: caller-owned completion state while cooking
//!
//! Every function here is pure. The same recipe always yields the same output.
//! `StepProgress` is the exception: it is state the caller owns and mutates.

/// Ingredient/state classification of `uses` tokens
pub mod resolver;

/// Canonical display form of a step
pub mod normalizer;

/// Sub-recipe partitioning
pub mod grouper;

/// Structural validation
pub mod validation;

/// Step completion tracking
pub mod progress;

pub use grouper::{group, structure, sub_recipe_id, sub_recipe_title};
pub use normalizer::normalize;
pub use progress::{Progress, SpentItems, StepProgress};
pub use resolver::{resolve, state_display_name, IngredientIndex, Resolution};
pub use validation::{validate, ValidationReport};
