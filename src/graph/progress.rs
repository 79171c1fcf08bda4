// ABOUTME: Caller-owned step completion state for cooking through a recipe
// ABOUTME: Propagates completion upstream through states and reports remaining time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::duration::step_minutes;
use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, Step};

use super::grouper::sub_recipe_id;

/// Completed and total step counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Progress {
    /// Steps marked done
    pub completed: usize,
    /// Steps counted
    pub total: usize,
}

/// Ingredients, states, and tools no incomplete step still needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpentItems {
    /// Ingredient ids
    pub ingredients: BTreeSet<String>,
    /// State names
    pub states: BTreeSet<String>,
    /// Tool names
    pub tools: BTreeSet<String>,
}

/// Set of completed step ids
///
/// Marking a step done also marks every step that produced one of its input
/// states, transitively. Unmarking only affects the step itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepProgress {
    completed: BTreeSet<String>,
}

impl StepProgress {
    /// Nothing completed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a step is marked done
    #[must_use]
    pub fn is_complete(&self, step_id: &str) -> bool {
        self.completed.contains(step_id)
    }

    /// Flip a step, returning whether it is now complete
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the recipe has no step with that id.
    pub fn toggle(&mut self, recipe: &Recipe, step_id: &str) -> AppResult<bool> {
        let completed = !self.is_complete(step_id);
        self.set_complete(recipe, step_id, completed)?;
        Ok(completed)
    }

    /// Mark a step done (with its upstream producers) or not done
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the recipe has no step with that id.
    pub fn set_complete(&mut self, recipe: &Recipe, step_id: &str, completed: bool) -> AppResult<()> {
        if !recipe.steps.iter().any(|step| step.id == step_id) {
            return Err(AppError::not_found(format!("step '{step_id}'")));
        }

        if !completed {
            self.completed.remove(step_id);
            return Ok(());
        }

        let producers: HashMap<&str, &str> = recipe
            .steps
            .iter()
            .filter_map(|step| step.produced_state().map(|state| (state, step.id.as_str())))
            .collect();
        let steps: HashMap<&str, &Step> = recipe.steps.iter().map(|step| (step.id.as_str(), step)).collect();

        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack = vec![step_id];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            self.completed.insert(current.to_owned());
            let Some(step) = steps.get(current) else {
                continue;
            };
            stack.extend(
                step.uses
                    .iter()
                    .filter_map(|token| producers.get(token.as_str()).copied())
                    .filter(|producer| !visited.contains(producer)),
            );
        }

        debug!(step = step_id, marked = visited.len(), "Marked step complete");
        Ok(())
    }

    /// Mark every step of a sub-recipe done or not done
    pub fn set_sub_recipe(&mut self, recipe: &Recipe, sub_recipe: &str, completed: bool) {
        for step in steps_of(recipe, sub_recipe) {
            if completed {
                self.completed.insert(step.id.clone());
            } else {
                self.completed.remove(&step.id);
            }
        }
    }

    /// Completed steps of one sub-recipe
    #[must_use]
    pub fn sub_recipe_progress(&self, recipe: &Recipe, sub_recipe: &str) -> Progress {
        self.count(steps_of(recipe, sub_recipe))
    }

    /// Whether a sub-recipe has steps and all of them are done
    #[must_use]
    pub fn sub_recipe_complete(&self, recipe: &Recipe, sub_recipe: &str) -> bool {
        let progress = self.sub_recipe_progress(recipe, sub_recipe);
        progress.total > 0 && progress.completed == progress.total
    }

    /// Completed steps across the whole recipe
    #[must_use]
    pub fn total_progress(&self, recipe: &Recipe) -> Progress {
        self.count(recipe.steps.iter())
    }

    /// Minutes of every step not yet done
    #[must_use]
    pub fn remaining_minutes(&self, recipe: &Recipe) -> u32 {
        self.minutes_left(recipe.steps.iter())
    }

    /// Minutes of a sub-recipe's steps not yet done
    #[must_use]
    pub fn sub_recipe_remaining_minutes(&self, recipe: &Recipe, sub_recipe: &str) -> u32 {
        self.minutes_left(steps_of(recipe, sub_recipe))
    }

    /// Inputs and tools whose consumers are all complete
    ///
    /// Only items consumed by at least one step are considered.
    #[must_use]
    pub fn spent_items(&self, recipe: &Recipe) -> SpentItems {
        let states: HashSet<&str> = recipe.steps.iter().filter_map(Step::produced_state).collect();
        let mut still_needed: HashSet<&str> = HashSet::new();
        let mut consumed: Vec<&str> = Vec::new();
        let mut tools: Vec<&str> = Vec::new();

        for step in &recipe.steps {
            let done = self.is_complete(&step.id);
            for token in &step.uses {
                consumed.push(token);
                if !done {
                    still_needed.insert(token);
                }
            }
            for tool in &step.requires {
                tools.push(tool);
                if !done {
                    still_needed.insert(tool);
                }
            }
        }

        let mut spent = SpentItems::default();
        for token in consumed.into_iter().filter(|token| !still_needed.contains(token)) {
            if states.contains(token) {
                spent.states.insert(token.to_owned());
            } else {
                spent.ingredients.insert(token.to_owned());
            }
        }
        for tool in tools.into_iter().filter(|tool| !still_needed.contains(tool)) {
            spent.tools.insert(tool.to_owned());
        }
        spent
    }

    /// Number of completed steps
    #[must_use]
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    /// Whether nothing is completed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Reset every step
    pub fn clear(&mut self) {
        self.completed.clear();
    }

    fn count<'a>(&self, steps: impl Iterator<Item = &'a Step>) -> Progress {
        steps.fold(Progress::default(), |mut progress, step| {
            progress.total += 1;
            if self.is_complete(&step.id) {
                progress.completed += 1;
            }
            progress
        })
    }

    fn minutes_left<'a>(&self, steps: impl Iterator<Item = &'a Step>) -> u32 {
        steps
            .filter(|step| !self.is_complete(&step.id))
            .map(step_minutes)
            .fold(0, u32::saturating_add)
    }
}

fn steps_of<'a>(recipe: &'a Recipe, sub_recipe: &'a str) -> impl Iterator<Item = &'a Step> {
    recipe
        .steps
        .iter()
        .filter(move |step| sub_recipe_id(step) == sub_recipe)
}
