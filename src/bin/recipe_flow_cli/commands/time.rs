// ABOUTME: Time command for recipe-flow
// ABOUTME: Sums step durations into active, passive, and total time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use std::path::Path;

use recipe_flow::duration::total_time;
use recipe_flow::errors::AppResult;

use crate::helpers::display::display_time;
use crate::helpers::input::{load_valid_recipe, print_json};

type Result<T> = AppResult<T>;

/// Print the time summary of a recipe file
pub fn run(path: &Path, json: bool) -> Result<()> {
    let recipe = load_valid_recipe(path)?;
    let summary = total_time(&recipe);

    if json {
        print_json(&summary)?;
    } else {
        display_time(&recipe, &summary);
    }
    Ok(())
}
