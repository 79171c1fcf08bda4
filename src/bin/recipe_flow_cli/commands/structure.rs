// ABOUTME: Structure command for recipe-flow
// ABOUTME: Prints sub-recipes with their normalized steps and resolved inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use std::path::Path;

use recipe_flow::errors::AppResult;
use recipe_flow::graph::structure;
use recipe_flow::models::UnitSystem;

use crate::helpers::display::display_sub_recipes;
use crate::helpers::input::{load_valid_recipe, print_json};

type Result<T> = AppResult<T>;

/// Print the sub-recipe breakdown of a recipe file
pub fn run(path: &Path, system: UnitSystem, json: bool) -> Result<()> {
    let recipe = load_valid_recipe(path)?;
    let structured = structure(&recipe);

    if json {
        print_json(&structured)?;
    } else {
        display_sub_recipes(&structured.recipe.metadata.title, &structured.sub_recipes, system);
    }
    Ok(())
}
