// ABOUTME: Structural error and warning types for recipe step graphs
// ABOUTME: Reports unresolved references, name collisions, and malformed durations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

//! # Graph Error Types
//!
//! Provides structured error types for recipe-graph validation:
//! - `GraphError` - structural problems that reject the whole recipe
//! - `GraphWarning` - suspicious but renderable authoring mistakes
//!
//! Both carry the step or state identifiers needed to point the author at
//! the offending record.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Structural errors in a recipe's step graph.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphError {
    /// A `uses` token matches neither an ingredient id nor an earlier `produces`
    #[error("step '{step_id}' uses '{token}' which is neither an ingredient nor a state produced by an earlier step")]
    UnresolvedReference {
        /// Step carrying the reference
        step_id: String,
        /// Offending token
        token: String,
    },
    /// Two steps produce the same state name
    #[error("state '{state}' is produced by both step '{first_step}' and step '{second_step}'")]
    DuplicateProduction {
        /// State produced twice
        state: String,
        /// First producer in authoring order
        first_step: String,
        /// Second producer in authoring order
        second_step: String,
    },
    /// A `duration` does not match `PT(nH)?(nM)?`
    #[error("step '{step_id}' has malformed duration '{value}'")]
    MalformedDuration {
        /// Step carrying the duration
        step_id: String,
        /// Raw duration value
        value: String,
    },
    /// A step produces a state named like a declared ingredient
    #[error("step '{step_id}' produces state '{state}' which is already an ingredient id")]
    StateShadowsIngredient {
        /// Colliding name
        state: String,
        /// Producing step
        step_id: String,
    },
    /// `finalState` is not produced by any step
    #[error("final state '{state}' is not produced by any step")]
    UnproducedFinalState {
        /// Declared final state
        state: String,
    },
    /// Two ingredients share the same id
    #[error("ingredient id '{id}' is declared more than once")]
    DuplicateIngredientId {
        /// Repeated ingredient id
        id: String,
    },
    /// Two steps share the same id
    #[error("step id '{id}' is declared more than once")]
    DuplicateStepId {
        /// Repeated step id
        id: String,
    },
}

impl GraphError {
    /// Step identifier the error points at, when there is one
    #[must_use]
    pub fn step_id(&self) -> Option<&str> {
        match self {
            Self::UnresolvedReference { step_id, .. }
            | Self::MalformedDuration { step_id, .. }
            | Self::StateShadowsIngredient { step_id, .. } => Some(step_id),
            Self::DuplicateProduction { second_step, .. } => Some(second_step),
            Self::DuplicateStepId { id } => Some(id),
            Self::UnproducedFinalState { .. } | Self::DuplicateIngredientId { .. } => None,
        }
    }

    /// Serialize for structured error details
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut value = serde_json::to_value(self).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut value {
            map.insert("message".to_owned(), Value::String(self.to_string()));
        }
        value
    }
}

/// Non-fatal findings that do not block rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphWarning {
    /// A non-optional ingredient is declared but never used
    UnusedIngredient {
        /// Ingredient id
        id: String,
    },
    /// A state is produced but never consumed and is not the final state
    OrphanState {
        /// State name
        state: String,
        /// Producing step
        step_id: String,
    },
    /// A step consumes nothing
    EmptyUses {
        /// Step id
        step_id: String,
    },
}

impl fmt::Display for GraphWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnusedIngredient { id } => {
                write!(f, "ingredient '{id}' is not referenced by any step")
            }
            Self::OrphanState { state, step_id } => write!(
                f,
                "state '{state}' produced by step '{step_id}' is never consumed"
            ),
            Self::EmptyUses { step_id } => write!(f, "step '{step_id}' consumes nothing"),
        }
    }
}
