// ABOUTME: Shared recipe fixtures and setup functions for integration tests
// ABOUTME: Provides the blanquette, apple tart, and seasoned blanquette recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::too_many_lines
)]
//! Shared test utilities for `recipe_flow`
//!
//! Fixtures are written as JSON so every test also goes through the same
//! deserialization path as authored recipe files.

use std::env;
use std::sync::Once;

use recipe_flow::models::{AggregatedIngredient, Recipe};
use serde_json::{json, Value};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, default WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Deserialize a recipe fixture
pub fn recipe_from(value: Value) -> Recipe {
    init_test_logging();
    serde_json::from_value(value).unwrap()
}

/// Blanquette de veau as JSON: 9 ingredients, 4 untagged steps
pub fn blanquette_json() -> Value {
    json!({
        "metadata": {
            "title": "Blanquette de veau",
            "servings": 4,
            "difficulty": "medium",
            "nationality": "fr"
        },
        "ingredients": [
            {"id": "veau", "name": "Veau", "quantity": 800, "unit": "g", "category": "meat"},
            {"id": "carottes", "name": "Carottes", "quantity": 3, "unit": "unit", "category": "produce"},
            {"id": "oignon", "name": "Oignon", "quantity": 1, "unit": "unit", "category": "produce"},
            {"id": "bouquet_garni", "name": "Bouquet garni", "quantity": 1, "unit": "unit", "category": "spice"},
            {"id": "beurre", "name": "Beurre", "quantity": 40, "unit": "g", "category": "dairy"},
            {"id": "farine", "name": "Farine", "quantity": 40, "unit": "g", "category": "pantry"},
            {"id": "creme_fraiche", "name": "Crème fraîche", "quantity": 200, "unit": "ml", "category": "dairy"},
            {"id": "jaune_oeuf", "name": "Jaune d'oeuf", "quantity": 2, "unit": "unit", "category": "egg"},
            {"id": "citron", "name": "Citron", "quantity": 1, "unit": "tbsp", "category": "produce"}
        ],
        "tools": ["cocotte", "fouet", "casserole"],
        "steps": [
            {
                "id": "step_decoupe",
                "action": "Découper le veau en morceaux",
                "stepType": "prep",
                "duration": "PT15M",
                "uses": ["veau"],
                "produces": "veau_decoupe"
            },
            {
                "id": "step_cuisson",
                "action": "Cuire la viande avec les légumes",
                "stepType": "cook",
                "isPassive": true,
                "duration": "PT1H30M",
                "uses": ["veau_decoupe", "carottes", "oignon", "bouquet_garni"],
                "produces": "viande_cuite",
                "requires": ["cocotte"]
            },
            {
                "id": "step_roux",
                "action": "Préparer un roux blanc",
                "stepType": "cook",
                "duration": "PT5M",
                "uses": ["beurre", "farine"],
                "produces": "roux_blanc",
                "requires": ["casserole", "fouet"]
            },
            {
                "id": "step_sauce",
                "action": "Lier la sauce et napper la viande",
                "stepType": "combine",
                "duration": "PT10M",
                "uses": ["roux_blanc", "viande_cuite", "creme_fraiche", "jaune_oeuf", "citron"],
                "produces": "blanquette_terminee",
                "requires": ["fouet"]
            }
        ],
        "finalState": "blanquette_terminee"
    })
}

/// Blanquette de veau
pub fn blanquette() -> Recipe {
    recipe_from(blanquette_json())
}

/// Blanquette with salt "to taste" added by a seasoning step
pub fn seasoned_blanquette() -> Recipe {
    let mut value = blanquette_json();
    value["ingredients"].as_array_mut().unwrap().push(json!({
        "id": "sel", "name": "Sel", "quantity": null, "unit": null, "category": "spice"
    }));
    value["steps"].as_array_mut().unwrap().push(json!({
        "id": "step_assaisonnement",
        "action": "Rectifier l'assaisonnement",
        "stepType": "serve",
        "uses": ["sel", "blanquette_terminee"],
        "produces": "blanquette_assaisonnee"
    }));
    value["finalState"] = json!("blanquette_assaisonnee");
    recipe_from(value)
}

/// Tarte aux pommes as JSON: steps tagged pate, garniture, assemblage
pub fn tarte_json() -> Value {
    json!({
        "metadata": {"title": "Tarte aux pommes", "servings": 6},
        "ingredients": [
            {"id": "farine", "name": "Farine", "quantity": 250, "unit": "g", "category": "pantry"},
            {"id": "beurre", "name": "Beurre", "quantity": 125, "unit": "g", "category": "dairy"},
            {"id": "eau", "name": "Eau", "quantity": 50, "unit": "ml", "category": "beverage"},
            {"id": "pommes", "name": "Pommes", "quantity": 6, "unit": "pieces", "category": "produce"},
            {"id": "sucre", "name": "Sucre", "quantity": 80, "unit": "g", "category": "pantry"},
            {"id": "cannelle", "name": "Cannelle", "quantity": 1, "unit": "tsp", "category": "spice"}
        ],
        "tools": ["four"],
        "steps": [
            {
                "id": "step_pate_1",
                "action": "Sabler la farine et le beurre",
                "stepType": "prep",
                "duration": "PT10M",
                "uses": ["farine", "beurre"],
                "produces": "sable",
                "subRecipe": "pate"
            },
            {
                "id": "step_pate_2",
                "action": "Ajouter l'eau et laisser reposer",
                "stepType": "rest",
                "isPassive": true,
                "duration": "PT30M",
                "uses": ["sable", "eau"],
                "produces": "pate_reposee",
                "subRecipe": "pate"
            },
            {
                "id": "step_garniture_1",
                "action": "Éplucher et trancher les pommes",
                "stepType": "prep",
                "duration": "PT10M",
                "uses": ["pommes"],
                "produces": "pommes_tranchees",
                "subRecipe": "garniture"
            },
            {
                "id": "step_garniture_2",
                "action": "Mélanger avec le sucre et la cannelle",
                "stepType": "combine",
                "duration": "PT5M",
                "uses": ["pommes_tranchees", "sucre", "cannelle"],
                "produces": "garniture_pommes",
                "subRecipe": "garniture"
            },
            {
                "id": "step_assemblage",
                "action": "Garnir la pâte et cuire",
                "stepType": "cook",
                "isPassive": true,
                "duration": "PT35M",
                "temperature": 180,
                "uses": ["pate_reposee", "garniture_pommes"],
                "produces": "tarte_cuite",
                "requires": ["four"],
                "subRecipe": "assemblage"
            }
        ],
        "finalState": "tarte_cuite"
    })
}

/// Tarte aux pommes
pub fn tarte() -> Recipe {
    recipe_from(tarte_json())
}

/// Ingredient ids of aggregated rows, in order
pub fn row_refs(rows: &[AggregatedIngredient]) -> Vec<&str> {
    rows.iter().map(|row| row.reference.as_str()).collect()
}

/// Find a row by ingredient id
pub fn row<'a>(rows: &'a [AggregatedIngredient], reference: &str) -> &'a AggregatedIngredient {
    rows.iter().find(|row| row.reference == reference).unwrap()
}
