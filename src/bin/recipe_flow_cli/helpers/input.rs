// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors
// ABOUTME: Recipe loading for recipe-flow commands
// ABOUTME: Rejects structurally broken recipes before any view is built

use std::path::Path;

use recipe_flow::errors::AppResult;
use recipe_flow::graph::validate;
use recipe_flow::loader::load_recipe;
use recipe_flow::models::Recipe;
use serde::Serialize;
use tracing::warn;

type Result<T> = AppResult<T>;

/// Load a recipe and refuse it if its step graph has structural errors
pub fn load_valid_recipe(path: &Path) -> Result<Recipe> {
    let recipe = load_recipe(path)?;
    let warnings = validate(&recipe).into_result()?;
    for warning in &warnings {
        warn!(recipe = %recipe.metadata.title, "{warning}");
    }
    Ok(recipe)
}

/// Write a value to stdout as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
