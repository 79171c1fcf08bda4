// ABOUTME: Partitions normalized steps into ordered sub-recipes
// ABOUTME: Attaches each group's directly consumed ingredients and derives its title
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::constants::sub_recipes::{DEFAULT_RECIPE_TITLE, MAIN_SUB_RECIPE_ID};
use crate::models::{Recipe, Step, StructuredRecipe, SubRecipe, SubRecipeIngredient};

use super::normalizer::normalize;
use super::resolver::IngredientIndex;

/// Sub-recipe id a step belongs to
#[must_use]
pub fn sub_recipe_id(step: &Step) -> &str {
    step.sub_recipe
        .as_deref()
        .filter(|tag| !tag.is_empty())
        .unwrap_or(MAIN_SUB_RECIPE_ID)
}

/// Display title of a sub-recipe
///
/// `main` takes the recipe title (falling back to "Recipe"); any other id is
/// shown with its first character upper-cased.
#[must_use]
pub fn sub_recipe_title(id: &str, recipe_title: &str) -> String {
    if id == MAIN_SUB_RECIPE_ID {
        if recipe_title.is_empty() {
            DEFAULT_RECIPE_TITLE.to_owned()
        } else {
            recipe_title.to_owned()
        }
    } else {
        let mut chars = id.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }
}

/// Group a recipe's steps into sub-recipes in first-occurrence order
///
/// Every step lands in exactly one group and keeps its authoring order. A
/// group's ingredient list holds only the ingredients its own steps consume;
/// states coming from other groups do not pull their ingredients in.
#[must_use]
pub fn group(recipe: &Recipe) -> Vec<SubRecipe> {
    let index = IngredientIndex::new(&recipe.ingredients);
    let mut groups: Vec<SubRecipe> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut seen_ingredients: Vec<HashSet<&str>> = Vec::new();

    for step in &recipe.steps {
        let id = sub_recipe_id(step);
        let position = *positions.entry(id).or_insert_with(|| {
            groups.push(SubRecipe {
                id: id.to_owned(),
                title: sub_recipe_title(id, &recipe.metadata.title),
                ingredients: Vec::new(),
                steps: Vec::new(),
            });
            seen_ingredients.push(HashSet::new());
            groups.len() - 1
        });

        let sub_recipe = &mut groups[position];
        let seen = &mut seen_ingredients[position];
        for token in &step.uses {
            if let Some(ingredient) = index.get(token) {
                if seen.insert(token.as_str()) {
                    sub_recipe
                        .ingredients
                        .push(SubRecipeIngredient::from_ingredient(ingredient));
                }
            }
        }
        sub_recipe.steps.push(normalize(step, &index));
    }

    debug!(
        recipe = %recipe.metadata.title,
        steps = recipe.steps.len(),
        sub_recipes = groups.len(),
        "Grouped recipe steps into sub-recipes"
    );

    groups
}

/// The recipe together with its derived sub-recipes
#[must_use]
pub fn structure(recipe: &Recipe) -> StructuredRecipe {
    StructuredRecipe {
        sub_recipes: group(recipe),
        recipe: recipe.clone(),
    }
}
