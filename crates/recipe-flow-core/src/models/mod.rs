// ABOUTME: Recipe data models for authored input and derived display structures
// ABOUTME: Re-exports Recipe, Step, SubRecipe, StepInput and the shopping-list types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

//! # Data Models
//!
//! ## Design Principles
//!
//! - **Camel-case wire format**: field names match the authored recipe JSON
//! - **Immutable input**: `Recipe` is owned by the caller and never mutated
//! - **Explicit variants**: step inputs are a tagged union, never duck-typed
//!
//! ## Core Models
//!
//! - `Recipe`: authored recipe with ingredients and steps
//! - `NormalizedStep` / `SubRecipe`: display structures derived from the step graph
//! - `AggregatedIngredient`: one shopping-list row

mod preferences;
mod recipe;
mod shopping;
mod structure;

pub use preferences::{GroupBy, UnitSystem};
pub use recipe::{Ingredient, Recipe, RecipeMetadata, Step};
pub use shopping::{AggregatedIngredient, IngredientGroup};
pub use structure::{
    ComponentInput, ComponentType, NormalizedStep, StateInput, StateType, StepInput, StepMode,
    StepOutput, StructuredRecipe, SubRecipe, SubRecipeIngredient, SubRecipeInputType,
};
