// ABOUTME: Derived display structures built from the authored step graph
// ABOUTME: NormalizedStep, tagged StepInput/StepOutput, SubRecipe, and StructuredRecipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use serde::{Deserialize, Serialize};

use super::recipe::{Ingredient, Recipe};

/// Wire marker for ingredient references (`"type": "ingredient"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    /// The only value: a raw ingredient
    #[default]
    Ingredient,
}

/// Wire marker for state references (`"type": "state"`, `"inputType": "state"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateType {
    /// The only value: an intermediate state
    #[default]
    State,
}

/// A `uses` token that resolved to a declared ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentInput {
    /// Ingredient id
    #[serde(rename = "ref")]
    pub reference: String,
    /// Always `ingredient`
    #[serde(rename = "type")]
    pub kind: ComponentType,
    /// Authored quantity, `None` for "to taste"
    pub amount: Option<f64>,
    /// Authored unit
    pub unit: Option<String>,
    /// Shopping category
    pub category: String,
}

/// A `uses` token that names an intermediate state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateInput {
    /// State token as written in `uses`
    #[serde(rename = "ref")]
    pub reference: String,
    /// Always `state`
    #[serde(rename = "type")]
    pub kind: StateType,
    /// Display name (underscores replaced by spaces)
    pub name: String,
}

/// One consumed reference of a normalized step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "inputType", rename_all = "lowercase")]
pub enum StepInput {
    /// Raw ingredient
    Component(ComponentInput),
    /// Intermediate state
    State(StateInput),
}

impl StepInput {
    /// The referenced token
    #[must_use]
    pub fn reference(&self) -> &str {
        match self {
            Self::Component(input) => &input.reference,
            Self::State(input) => &input.reference,
        }
    }

    /// Whether this input is a raw ingredient
    #[must_use]
    pub const fn is_ingredient(&self) -> bool {
        matches!(self, Self::Component(_))
    }

    /// Value of the `type` discriminant (`"ingredient"` or `"state"`)
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Component(_) => "ingredient",
            Self::State(_) => "state",
        }
    }
}

/// State emitted by a normalized step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOutput {
    /// Always `state`
    pub input_type: StateType,
    /// Produced token
    #[serde(rename = "ref")]
    pub reference: String,
    /// Always `state`
    #[serde(rename = "type")]
    pub kind: StateType,
    /// Produced token, repeated for renderers that read `state`
    pub state: String,
    /// Display name (underscores replaced by spaces)
    pub name: String,
}

/// Whether a step needs attention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepMode {
    /// Cook is busy during the step
    #[default]
    Active,
    /// Step can be left unattended
    Passive,
}

/// Canonical display form of a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedStep {
    /// Step id
    pub id: String,
    /// Instruction text
    pub action: String,
    /// Duration verbatim from the authored step
    pub time: Option<String>,
    /// prep, combine, cook, rest, serve
    pub step_type: String,
    /// Active or passive
    pub step_mode: StepMode,
    /// Same information as `step_mode`, kept for older renderers
    pub is_passive: bool,
    /// Resolved inputs in `uses` order
    pub inputs: Vec<StepInput>,
    /// Produced state
    pub output: Option<StepOutput>,
    /// Raw `uses` tokens
    pub uses: Vec<String>,
    /// Raw `produces` value
    pub produces: Option<String>,
    /// Tools, as authored
    pub requires: Vec<String>,
    /// Tools, same list as `requires`
    pub tools: Vec<String>,
    /// Temperature in Celsius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i32>,
}

/// Ingredient directly consumed inside one sub-recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubRecipeIngredient {
    /// Always `component`
    pub input_type: SubRecipeInputType,
    /// Ingredient id
    #[serde(rename = "ref")]
    pub reference: String,
    /// Always `ingredient`
    #[serde(rename = "type")]
    pub kind: ComponentType,
    /// Authored quantity, `None` for "to taste"
    pub amount: Option<f64>,
    /// Authored unit
    pub unit: Option<String>,
    /// Shopping category
    pub category: String,
    /// Display name
    pub name: String,
}

/// Wire marker for sub-recipe ingredients (`"inputType": "component"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubRecipeInputType {
    /// The only value
    #[default]
    Component,
}

impl SubRecipeIngredient {
    /// Build from the declared ingredient record
    #[must_use]
    pub fn from_ingredient(ingredient: &Ingredient) -> Self {
        Self {
            input_type: SubRecipeInputType::Component,
            reference: ingredient.id.clone(),
            kind: ComponentType::Ingredient,
            amount: ingredient.quantity,
            unit: ingredient.unit.clone(),
            category: ingredient.category.clone(),
            name: ingredient.name.clone(),
        }
    }
}

/// Ordered group of steps sharing a `subRecipe` tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubRecipe {
    /// Tag value (`main` for untagged steps)
    pub id: String,
    /// Display title
    pub title: String,
    /// Ingredients referenced directly by this group's steps
    pub ingredients: Vec<SubRecipeIngredient>,
    /// Member steps in authoring order
    pub steps: Vec<NormalizedStep>,
}

/// Authored recipe plus its derived sub-recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredRecipe {
    /// The authored recipe, flattened into the same JSON object
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Sub-recipes in first-occurrence order
    pub sub_recipes: Vec<SubRecipe>,
}
