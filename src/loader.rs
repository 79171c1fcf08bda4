// ABOUTME: Reads authored recipe JSON from strings, files, or stdin
// ABOUTME: Maps I/O and parse failures onto AppError codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use std::fs;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::Recipe;

/// Path value that means "read standard input"
pub const STDIN_PATH: &str = "-";

/// Parse a recipe from JSON text
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` when the text is not a valid recipe document.
pub fn parse_recipe(json: &str) -> AppResult<Recipe> {
    serde_json::from_str(json).map_err(|e| {
        AppError::serialization(format!(
            "invalid recipe JSON at line {} column {}: {e}",
            e.line(),
            e.column()
        ))
        .with_source(e)
    })
}

/// Load a recipe from a file, or from stdin when `path` is `-`
///
/// # Errors
///
/// Returns `ErrorCode::ResourceNotFound` for a missing file, `ErrorCode::StorageError`
/// for other read failures, and `ErrorCode::SerializationError` for invalid JSON.
pub fn load_recipe(path: &Path) -> AppResult<Recipe> {
    let text = if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::not_found(format!("recipe file {}", path.display()))
            } else {
                AppError::storage(format!("cannot read {}: {e}", path.display())).with_source(e)
            }
        })?
    };

    let recipe = parse_recipe(&text)?;
    debug!(
        path = %path.display(),
        ingredients = recipe.ingredients.len(),
        steps = recipe.steps.len(),
        "Loaded recipe"
    );
    Ok(recipe)
}
