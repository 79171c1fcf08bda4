// ABOUTME: Classifies a step's `uses` token as a raw ingredient or an intermediate state
// ABOUTME: IngredientIndex gives O(1) lookup of declared ingredients by id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use std::collections::HashMap;

use crate::models::{ComponentInput, ComponentType, Ingredient, StateInput, StateType, StepInput};

/// Lookup of declared ingredients by id, built once per recipe
///
/// When two ingredients share an id the first declaration wins; validation
/// reports the duplicate separately.
#[derive(Debug, Clone, Default)]
pub struct IngredientIndex<'a> {
    by_id: HashMap<&'a str, &'a Ingredient>,
}

impl<'a> IngredientIndex<'a> {
    /// Index a recipe's ingredient list
    #[must_use]
    pub fn new(ingredients: &'a [Ingredient]) -> Self {
        let mut by_id = HashMap::with_capacity(ingredients.len());
        for ingredient in ingredients {
            by_id.entry(ingredient.id.as_str()).or_insert(ingredient);
        }
        Self { by_id }
    }

    /// Ingredient declared under `id`
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a Ingredient> {
        self.by_id.get(id).copied()
    }

    /// Whether `id` names a declared ingredient
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of distinct ingredient ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether the recipe declares no ingredients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// What a `uses` token refers to
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// A declared raw ingredient
    Ingredient(&'a Ingredient),
    /// Anything else: an intermediate state
    State {
        /// Token with underscores replaced by spaces
        name: String,
    },
}

impl Resolution<'_> {
    /// Whether the token resolved to a raw ingredient
    #[must_use]
    pub const fn is_ingredient(&self) -> bool {
        matches!(self, Self::Ingredient(_))
    }

    /// Build the tagged step input for `token`
    #[must_use]
    pub fn into_step_input(self, token: &str) -> StepInput {
        match self {
            Self::Ingredient(ingredient) => StepInput::Component(ComponentInput {
                reference: token.to_owned(),
                kind: ComponentType::Ingredient,
                amount: ingredient.quantity,
                unit: ingredient.unit.clone(),
                category: ingredient.category.clone(),
            }),
            Self::State { name } => StepInput::State(StateInput {
                reference: token.to_owned(),
                kind: StateType::State,
                name,
            }),
        }
    }
}

/// Classify `token` against the ingredient index
///
/// Total: a token that is not a declared ingredient is always a state. Whether
/// that state is actually produced upstream is checked by validation.
#[must_use]
pub fn resolve<'a>(token: &str, index: &IngredientIndex<'a>) -> Resolution<'a> {
    index.get(token).map_or_else(
        || Resolution::State {
            name: state_display_name(token),
        },
        Resolution::Ingredient,
    )
}

/// Human-readable form of a state token (`veau_decoupe` -> `veau decoupe`)
#[must_use]
pub fn state_display_name(token: &str) -> String {
    token.replace('_', " ")
}
