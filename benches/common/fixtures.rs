// ABOUTME: Benchmark fixtures generating synthetic recipes of configurable size
// ABOUTME: Provides deterministic step graphs for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

//! Benchmark test fixtures for generating synthetic recipes.
//!
//! Provides deterministic data generation for reproducible performance measurements.

use recipe_flow::constants::categories::CATEGORY_ORDER;
use recipe_flow::models::{Ingredient, Recipe, Step};

/// Predefined recipe sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RecipeSize {
    /// Weeknight dinner (10 ingredients, 8 steps)
    Small,
    /// Holiday dish (40 ingredients, 30 steps)
    Medium,
    /// Banquet menu (200 ingredients, 150 steps)
    Large,
}

impl RecipeSize {
    #[must_use]
    pub const fn ingredients(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 40,
            Self::Large => 200,
        }
    }

    #[must_use]
    pub const fn steps(self) -> usize {
        match self {
            Self::Small => 8,
            Self::Medium => 30,
            Self::Large => 150,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

const SUB_RECIPES: [&str; 5] = ["pate", "farce", "sauce", "garniture", "dressage"];
const UNITS: [Option<&str>; 5] = [Some("g"), Some("ml"), Some("unit"), Some("tbsp"), None];

#[allow(clippy::cast_precision_loss)]
fn generate_ingredient(index: usize) -> Ingredient {
    let quantity = if index % 7 == 6 {
        None
    } else {
        Some(((index * 37) % 900 + 10) as f64)
    };
    Ingredient::new(
        format!("ing_{index}"),
        format!("Ingredient {index}"),
        quantity,
        UNITS[index % UNITS.len()],
    )
    .with_category(CATEGORY_ORDER[index % CATEGORY_ORDER.len()])
}

/// Generate a valid chained recipe: every ingredient is used and each step
/// consumes the previous step's state
#[must_use]
pub fn generate_recipe(size: RecipeSize) -> Recipe {
    let ingredient_count = size.ingredients();
    let step_count = size.steps();
    let mut recipe = Recipe::new(format!("Benchmark {}", size.name()), 4);

    for index in 0..ingredient_count {
        recipe = recipe.with_ingredient(generate_ingredient(index));
    }

    let per_step = ingredient_count.div_ceil(step_count);
    for index in 0..step_count {
        let first = index * per_step;
        let mut uses: Vec<String> = (first..(first + per_step).min(ingredient_count))
            .map(|i| format!("ing_{i}"))
            .collect();
        if index > 0 {
            uses.push(format!("state_{}", index - 1));
        }

        let mut step = Step::new(format!("step_{index}"), format!("Step {index}"))
            .using(uses)
            .producing(format!("state_{index}"))
            .in_sub_recipe(SUB_RECIPES[index * SUB_RECIPES.len() / step_count])
            .with_duration(format!("PT{}M", 5 + index % 20));
        if index % 3 == 2 {
            step = step.passive();
        }
        recipe = recipe.with_step(step);
    }

    recipe.with_final_state(format!("state_{}", step_count - 1))
}
