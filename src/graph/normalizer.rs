// ABOUTME: Converts one authored step into its canonical display form
// ABOUTME: Resolves inputs, derives the output state, and mirrors requires into tools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use crate::models::{NormalizedStep, StateType, Step, StepMode, StepOutput};

use super::resolver::{resolve, state_display_name, IngredientIndex};

/// Normalize a single step
///
/// Inputs follow `uses` order. The output is absent when `produces` is
/// missing or empty. The step's duration is carried verbatim in `time`.
#[must_use]
pub fn normalize(step: &Step, index: &IngredientIndex<'_>) -> NormalizedStep {
    let inputs = step
        .uses
        .iter()
        .map(|token| resolve(token, index).into_step_input(token))
        .collect();

    NormalizedStep {
        id: step.id.clone(),
        action: step.action.clone(),
        time: step.duration.clone(),
        step_type: step.step_type.clone(),
        step_mode: step_mode(step),
        is_passive: step.is_passive,
        inputs,
        output: step.produced_state().map(step_output),
        uses: step.uses.clone(),
        produces: step.produces.clone(),
        requires: step.requires.clone(),
        tools: step.requires.clone(),
        temperature: step.temperature,
    }
}

const fn step_mode(step: &Step) -> StepMode {
    if step.is_passive {
        StepMode::Passive
    } else {
        StepMode::Active
    }
}

fn step_output(state: &str) -> StepOutput {
    StepOutput {
        input_type: StateType::State,
        reference: state.to_owned(),
        kind: StateType::State,
        state: state.to_owned(),
        name: state_display_name(state),
    }
}
