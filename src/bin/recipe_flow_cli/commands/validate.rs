// ABOUTME: Validate command for recipe-flow
// ABOUTME: Reports every structural error and warning of a recipe's step graph
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use std::path::Path;

use recipe_flow::errors::{AppError, AppResult};
use recipe_flow::graph::validate;
use recipe_flow::loader::load_recipe;
use serde_json::json;
use tracing::info;

use crate::helpers::display::display_report;
use crate::helpers::input::print_json;

type Result<T> = AppResult<T>;

/// Validate a recipe file; an invalid graph becomes the command's error
pub fn run(path: &Path, json: bool) -> Result<()> {
    let recipe = load_recipe(path)?;
    let report = validate(&recipe);
    info!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Validated recipe"
    );

    if json {
        print_json(&json!({
            "valid": report.is_valid(),
            "errors": report.errors,
            "warnings": report.warnings,
        }))?;
    } else {
        display_report(&recipe.metadata.title, &report);
    }

    if report.is_valid() {
        Ok(())
    } else {
        // Already listed above; the error only carries the exit code
        Err(AppError::invalid_graph(&report.errors))
    }
}
