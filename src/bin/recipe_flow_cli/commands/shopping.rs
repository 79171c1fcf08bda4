// ABOUTME: Shopping list commands for recipe-flow
// ABOUTME: Prints scaled ingredient columns or clipboard text for a recipe file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use std::path::Path;

use recipe_flow::errors::AppResult;
use recipe_flow::shopping::copy_to_clipboard;
use recipe_flow::view::{build_view, ViewRequest};
use tracing::info;

use crate::helpers::display::display_columns;
use crate::helpers::input::{load_valid_recipe, print_json};

type Result<T> = AppResult<T>;

/// Print the ingredient list in columns
pub fn list(path: &Path, request: &ViewRequest, json: bool) -> Result<()> {
    let recipe = load_valid_recipe(path)?;
    let view = build_view(&recipe, request);
    info!(
        servings = view.servings,
        units = %view.unit_system,
        rows = view.ingredients.len(),
        "Built shopping list"
    );

    if json {
        print_json(&view)?;
    } else {
        display_columns(&view);
    }
    Ok(())
}

/// Print one `"{amount} {name}"` line per ingredient
pub fn copy(path: &Path, request: &ViewRequest) -> Result<()> {
    let recipe = load_valid_recipe(path)?;
    let view = build_view(&recipe, request);
    println!("{}", copy_to_clipboard(&view.ingredients));
    Ok(())
}
