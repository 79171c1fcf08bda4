// ABOUTME: Integration tests for loading recipe files and the recipe-flow binary
// ABOUTME: Writes fixtures to temporary directories and checks output and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use recipe_flow::errors::ErrorCode;
use recipe_flow::loader::{load_recipe, parse_recipe};
use serde_json::{json, Value};
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

fn run_cli(args: &[&str], file: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_recipe-flow"))
        .args(args)
        .arg(file)
        .env_remove("RECIPE_UNIT_SYSTEM")
        .env_remove("RECIPE_COLUMN_COUNT")
        .env_remove("RECIPE_SHOPPING_MODE")
        .env("RUST_LOG", "error")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

// ============================================================================
// Loader
// ============================================================================

#[test]
fn test_load_recipe_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "blanquette.json", &common::blanquette_json());

    let recipe = load_recipe(&path).unwrap();

    assert_eq!(recipe, common::blanquette());
    assert_eq!(recipe.steps[1].requires, vec!["cocotte"]);
    assert!(recipe.steps[1].is_passive);
}

#[test]
fn test_missing_fields_take_defaults() {
    let recipe = parse_recipe(r#"{"ingredients": [{"id": "sel", "name": "Sel"}]}"#).unwrap();

    assert_eq!(recipe.metadata.servings, 1);
    assert_eq!(recipe.ingredients[0].quantity, None);
    assert_eq!(recipe.ingredients[0].category, "other");
    assert!(recipe.steps.is_empty());
    assert!(recipe.final_state.is_empty());
}

#[test]
fn test_metadata_tags_survive_loading() {
    let recipe = parse_recipe(
        r#"{"metadata": {"title": "Tarte", "tags": ["dessert", "automne"]}, "tags": ["facile"]}"#,
    )
    .unwrap();

    assert_eq!(recipe.metadata.tags, vec!["dessert", "automne"]);
    assert_eq!(recipe.tags, vec!["facile"]);

    let value = serde_json::to_value(&recipe).unwrap();
    assert_eq!(value["metadata"]["tags"], json!(["dessert", "automne"]));
    assert!(parse_recipe("{}").unwrap().metadata.tags.is_empty());
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"metadata\": ").unwrap();

    let error = load_recipe(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let error = load_recipe(&dir.path().join("absent.json")).unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.code.exit_code(), 4);
}

// ============================================================================
// Command Line
// ============================================================================

#[test]
fn test_cli_validate_accepts_fixture() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "tarte.json", &common::tarte_json());

    let output = run_cli(&["validate"], &path);

    assert!(output.status.success());
    assert!(stdout(&output).contains("step graph is valid"));
}

#[test]
fn test_cli_validate_exits_2_on_broken_graph() {
    let dir = TempDir::new().unwrap();
    let mut value = common::tarte_json();
    value["steps"][4]["uses"] = json!(["pate_reposee", "garniture_ghost"]);
    let path = write_fixture(&dir, "broken.json", &value);

    let output = run_cli(&["--json", "validate"], &path);

    assert_eq!(output.status.code(), Some(2));
    let report: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["valid"], json!(false));
    assert_eq!(report["errors"][0]["token"], json!("garniture_ghost"));
}

#[test]
fn test_cli_structure_json() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "tarte.json", &common::tarte_json());

    let output = run_cli(&["structure", "--json"], &path);

    assert!(output.status.success());
    let structured: Value = serde_json::from_str(&stdout(&output)).unwrap();
    let ids: Vec<&str> = structured["subRecipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|sub| sub["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["pate", "garniture", "assemblage"]);
}

#[test]
fn test_cli_structure_shows_oven_temperature() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "tarte.json", &common::tarte_json());

    let metric = stdout(&run_cli(&["structure"], &path));
    assert!(metric.contains("at 180°C"));

    let imperial = stdout(&run_cli(&["structure", "--units", "imperial"], &path));
    assert!(imperial.contains("at 356°F"));
    assert!(!imperial.contains("°C"));
}

#[test]
fn test_cli_copy_scales_and_converts() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "blanquette.json", &common::blanquette_json());

    let output = run_cli(
        &["copy", "--servings", "8", "--units", "imperial", "--by-category"],
        &path,
    );

    assert!(output.status.success());
    let text = stdout(&output);
    let first = text.lines().next().unwrap();
    assert_eq!(first, "3.53 lb Veau");
    assert_eq!(text.lines().count(), 9);
}

#[test]
fn test_cli_copy_leaves_out_unused_ingredients() {
    let dir = TempDir::new().unwrap();
    let mut value = common::tarte_json();
    value["ingredients"].as_array_mut().unwrap().push(json!({
        "id": "vanille", "name": "Vanille", "quantity": 1, "unit": "pod", "category": "spice"
    }));
    let path = write_fixture(&dir, "tarte.json", &value);

    let listed = run_cli(&["shopping"], &path);
    assert!(stdout(&listed).contains("Vanille (unused)"));

    let output = run_cli(&["copy"], &path);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(!text.contains("Vanille"));
    assert_eq!(text.lines().count(), 6);
}

#[test]
fn test_cli_rejects_broken_graph_before_listing() {
    let dir = TempDir::new().unwrap();
    let mut value = common::blanquette_json();
    value["finalState"] = json!("never_made");
    let path = write_fixture(&dir, "blanquette.json", &value);

    let output = run_cli(&["shopping"], &path);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_cli_time_json() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "blanquette.json", &common::blanquette_json());

    let output = run_cli(&["time", "--json"], &path);

    assert!(output.status.success());
    let summary: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        summary,
        json!({"activeMinutes": 30, "passiveMinutes": 90, "totalMinutes": 120})
    );
}

#[test]
fn test_cli_missing_file_exits_4() {
    let dir = TempDir::new().unwrap();
    let output = run_cli(&["time"], &dir.path().join("absent.json"));

    assert_eq!(output.status.code(), Some(4));
}
