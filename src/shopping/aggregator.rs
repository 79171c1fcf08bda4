// ABOUTME: Flattens sub-recipe ingredients into scaled, formatted shopping-list rows
// ABOUTME: Shopping mode deduplicates recipe-wide; normal mode lists per sub-recipe plus unused
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::debug;

use crate::constants::categories::category_rank;
use crate::constants::sub_recipes::MAIN_SUB_RECIPE_ID;
use crate::graph::{group, sub_recipe_id, sub_recipe_title, IngredientIndex};
use crate::models::{AggregatedIngredient, GroupBy, Ingredient, Recipe, SubRecipe, UnitSystem};
use crate::units::{format_amount, scale, scale_ratio};

/// Display parameters for one aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregateOptions {
    /// Unit system amounts are rendered in
    pub unit_system: UnitSystem,
    /// Desired servings; `None` keeps the recipe's own servings
    pub servings: Option<u32>,
    /// Shopping mode (`Category`) or normal mode (`SubRecipe`)
    pub group_by: GroupBy,
}

impl AggregateOptions {
    /// Options for the shopping list in `unit_system`
    #[must_use]
    pub const fn shopping(unit_system: UnitSystem) -> Self {
        Self {
            unit_system,
            servings: None,
            group_by: GroupBy::Category,
        }
    }

    /// Set the desired servings
    #[must_use]
    pub const fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }
}

/// Ids of declared ingredients that no step's `uses` references
#[must_use]
pub fn unused_ingredient_ids(recipe: &Recipe) -> Vec<&str> {
    let referenced: HashSet<&str> = recipe
        .steps
        .iter()
        .flat_map(|step| step.uses.iter().map(String::as_str))
        .collect();

    let mut seen = HashSet::new();
    recipe
        .ingredients
        .iter()
        .map(|ingredient| ingredient.id.as_str())
        .filter(|id| !referenced.contains(id) && seen.insert(*id))
        .collect()
}

/// Aggregate a recipe's ingredients for display
///
/// In shopping mode every referenced ingredient appears once, attributed to
/// the sub-recipe of its first consuming step, ordered by category priority
/// and then by name. Unused ingredients are left out.
///
/// In normal mode each sub-recipe lists the ingredients its own steps consume,
/// in sub-recipe order. Unused ingredients are appended to the first group
/// with `is_unused` set.
#[must_use]
pub fn aggregate(recipe: &Recipe, options: &AggregateOptions) -> Vec<AggregatedIngredient> {
    let base = recipe.metadata.servings;
    let ratio = scale_ratio(base, options.servings.unwrap_or(base));
    let row = RowBuilder {
        ratio,
        unit_system: options.unit_system,
    };

    let rows = match options.group_by {
        GroupBy::Category => shopping_rows(recipe, &row),
        GroupBy::SubRecipe => sub_recipe_rows(recipe, &group(recipe), &row),
    };

    debug!(
        recipe = %recipe.metadata.title,
        mode = ?options.group_by,
        unit_system = %options.unit_system,
        ratio,
        rows = rows.len(),
        "Aggregated recipe ingredients"
    );

    rows
}

/// Shopping-list order: category priority, unknown categories alphabetically
/// after known ones, then name (case-insensitive)
#[must_use]
pub fn compare_for_shopping(a: &AggregatedIngredient, b: &AggregatedIngredient) -> Ordering {
    compare_categories(&a.category, &b.category)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Category priority order used by shopping mode
#[must_use]
pub fn compare_categories(a: &str, b: &str) -> Ordering {
    match (category_rank(a), category_rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

struct RowBuilder {
    ratio: f64,
    unit_system: UnitSystem,
}

impl RowBuilder {
    fn build(
        &self,
        ingredient: &Ingredient,
        sub_recipe_id: &str,
        sub_recipe_title: &str,
        is_unused: bool,
    ) -> AggregatedIngredient {
        AggregatedIngredient {
            reference: ingredient.id.clone(),
            name: ingredient.name.clone(),
            category: ingredient.category.clone(),
            amount: scale(ingredient.quantity, self.ratio),
            unit: ingredient.unit.clone(),
            display_amount: format_amount(
                ingredient.quantity,
                ingredient.unit.as_deref(),
                self.ratio,
                self.unit_system,
            ),
            is_unused,
            sub_recipe_id: sub_recipe_id.to_owned(),
            sub_recipe_title: sub_recipe_title.to_owned(),
        }
    }
}

fn shopping_rows(recipe: &Recipe, row: &RowBuilder) -> Vec<AggregatedIngredient> {
    let index = IngredientIndex::new(&recipe.ingredients);
    let mut seen = HashSet::new();
    let mut rows = Vec::new();

    // Steps are visited in authoring order, so the first consumer fixes the attribution.
    for step in &recipe.steps {
        let id = sub_recipe_id(step);
        for token in &step.uses {
            let Some(ingredient) = index.get(token) else {
                continue;
            };
            if seen.insert(ingredient.id.as_str()) {
                let title = sub_recipe_title(id, &recipe.metadata.title);
                rows.push(row.build(ingredient, id, &title, false));
            }
        }
    }

    rows.sort_by(compare_for_shopping);
    rows
}

fn sub_recipe_rows(
    recipe: &Recipe,
    sub_recipes: &[SubRecipe],
    row: &RowBuilder,
) -> Vec<AggregatedIngredient> {
    let index = IngredientIndex::new(&recipe.ingredients);
    let mut rows: Vec<AggregatedIngredient> = sub_recipes
        .iter()
        .flat_map(|sub| {
            sub.ingredients.iter().filter_map(|entry| {
                index
                    .get(&entry.reference)
                    .map(|ingredient| row.build(ingredient, &sub.id, &sub.title, false))
            })
        })
        .collect();

    let (first_id, first_title) = sub_recipes.first().map_or_else(
        || {
            (
                MAIN_SUB_RECIPE_ID.to_owned(),
                sub_recipe_title(MAIN_SUB_RECIPE_ID, &recipe.metadata.title),
            )
        },
        |sub| (sub.id.clone(), sub.title.clone()),
    );

    for id in unused_ingredient_ids(recipe) {
        if let Some(ingredient) = index.get(id) {
            rows.push(row.build(ingredient, &first_id, &first_title, true));
        }
    }

    // Keep the first group's unused rows contiguous with its used ones.
    if sub_recipes.len() > 1 {
        rows.sort_by_key(|r| usize::from(r.sub_recipe_id != first_id));
    }

    rows
}
