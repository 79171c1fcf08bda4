// ABOUTME: Whole-recipe structural validation of the step graph
// ABOUTME: Collects every GraphError plus non-fatal GraphWarnings in one pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::duration::IsoDuration;
use crate::errors::{AppError, AppResult, GraphError, GraphWarning};
use crate::models::Recipe;

use super::resolver::IngredientIndex;

/// Outcome of validating one recipe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Structural errors, in authoring order
    pub errors: Vec<GraphError>,
    /// Non-fatal findings, in authoring order
    pub warnings: Vec<GraphWarning>,
}

impl ValidationReport {
    /// Whether the recipe has no structural errors
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Reject the recipe if any error was found, otherwise hand back the warnings
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidRecipeGraph` carrying every structural error.
    pub fn into_result(self) -> AppResult<Vec<GraphWarning>> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(AppError::invalid_graph(&self.errors))
        }
    }
}

/// Validate a recipe's step graph
///
/// A `uses` token must name a declared ingredient or a state produced by an
/// *earlier* step. Forward references are unresolved even if a later step
/// produces the token. A produced state may not reuse an ingredient id, so
/// every token resolves to exactly one of the two.
#[must_use]
pub fn validate(recipe: &Recipe) -> ValidationReport {
    let mut report = ValidationReport::default();
    let index = IngredientIndex::new(&recipe.ingredients);

    let mut ingredient_ids = HashSet::new();
    for ingredient in &recipe.ingredients {
        if !ingredient_ids.insert(ingredient.id.as_str()) {
            report.errors.push(GraphError::DuplicateIngredientId {
                id: ingredient.id.clone(),
            });
        }
    }

    let mut step_ids = HashSet::new();
    let mut producers: HashMap<&str, &str> = HashMap::new();
    let mut production_order: Vec<(&str, &str)> = Vec::new();
    let mut used_ingredients: HashSet<&str> = HashSet::new();
    let mut consumed_states: HashSet<&str> = HashSet::new();

    for step in &recipe.steps {
        if !step_ids.insert(step.id.as_str()) {
            report.errors.push(GraphError::DuplicateStepId {
                id: step.id.clone(),
            });
        }

        if step.uses.is_empty() {
            report.warnings.push(GraphWarning::EmptyUses {
                step_id: step.id.clone(),
            });
        }

        for token in &step.uses {
            if index.contains(token) {
                used_ingredients.insert(token.as_str());
            } else if producers.contains_key(token.as_str()) {
                consumed_states.insert(token.as_str());
            } else {
                report.errors.push(GraphError::UnresolvedReference {
                    step_id: step.id.clone(),
                    token: token.clone(),
                });
            }
        }

        if let Some(raw) = step.duration.as_deref() {
            if let Err(error) = IsoDuration::parse_for_step(&step.id, raw) {
                report.errors.push(error);
            }
        }

        if let Some(state) = step.produced_state() {
            let shadows = index.contains(state);
            if shadows {
                report.errors.push(GraphError::StateShadowsIngredient {
                    state: state.to_owned(),
                    step_id: step.id.clone(),
                });
            }
            if let Some(first_step) = producers.get(state) {
                report.errors.push(GraphError::DuplicateProduction {
                    state: state.to_owned(),
                    first_step: (*first_step).to_owned(),
                    second_step: step.id.clone(),
                });
            } else {
                producers.insert(state, step.id.as_str());
                if !shadows {
                    production_order.push((state, step.id.as_str()));
                }
            }
        }
    }

    if !recipe.final_state.is_empty() && !producers.contains_key(recipe.final_state.as_str()) {
        report.errors.push(GraphError::UnproducedFinalState {
            state: recipe.final_state.clone(),
        });
    }

    for ingredient in &recipe.ingredients {
        if !ingredient.optional && !used_ingredients.contains(ingredient.id.as_str()) {
            report.warnings.push(GraphWarning::UnusedIngredient {
                id: ingredient.id.clone(),
            });
        }
    }

    for (state, step_id) in production_order {
        if state != recipe.final_state && !consumed_states.contains(state) {
            report.warnings.push(GraphWarning::OrphanState {
                state: state.to_owned(),
                step_id: step_id.to_owned(),
            });
        }
    }

    debug!(
        recipe = %recipe.metadata.title,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Validated recipe graph"
    );

    report
}
