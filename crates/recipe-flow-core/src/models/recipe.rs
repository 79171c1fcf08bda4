// ABOUTME: Authored recipe schema: metadata, ingredients, and typed steps
// ABOUTME: Steps reference ingredients or earlier states through `uses` and emit `produces`
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use serde::{Deserialize, Serialize};

use crate::constants::categories;

const fn default_servings() -> u32 {
    1
}

fn default_category() -> String {
    categories::OTHER.to_owned()
}

/// Recipe identification and classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMetadata {
    /// Recipe title in its original language
    #[serde(default)]
    pub title: String,
    /// Number of portions the authored quantities yield
    #[serde(default = "default_servings")]
    pub servings: u32,
    /// Preparation time (ISO-8601 duration)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    /// Cooking time (ISO-8601 duration)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    /// Difficulty label as authored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Recipe classification (dessert, `main_course`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_type: Option<String>,
    /// Recipe author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Book, website, or publication source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Country or cuisine of origin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    /// Short description of the dish
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Classification tags (season, diet, ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Main image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Default for RecipeMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            servings: default_servings(),
            prep_time: None,
            cook_time: None,
            difficulty: None,
            recipe_type: None,
            author: None,
            source: None,
            nationality: None,
            description: None,
            tags: Vec::new(),
            image_url: None,
        }
    }
}

/// A raw ingredient declared by the recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Identifier unique within the recipe, referenced from `Step::uses`
    pub id: String,
    /// Display name
    pub name: String,
    /// Amount for the base servings; `None` means "to taste"
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Unit as authored (`g`, `ml`, `tbsp`, `piece`, ...)
    #[serde(default)]
    pub unit: Option<String>,
    /// Shopping category
    #[serde(default = "default_category")]
    pub category: String,
    /// Initial preparation state (diced, softened, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
    /// Optional ingredients are exempt from the unused-ingredient warning
    #[serde(default)]
    pub optional: bool,
}

impl Ingredient {
    /// Create an ingredient in the "other" category
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: Option<f64>,
        unit: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            unit: unit.map(str::to_owned),
            category: default_category(),
            preparation: None,
            optional: false,
        }
    }

    /// Set the shopping category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Mark the ingredient optional
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// A single authored preparation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Unique step identifier
    pub id: String,
    /// Instruction text
    #[serde(default)]
    pub action: String,
    /// prep, combine, cook, rest, serve
    #[serde(default)]
    pub step_type: String,
    /// Step can be left unattended
    #[serde(default)]
    pub is_passive: bool,
    /// ISO-8601 duration (`PT1H30M`), `None` when there is no fixed duration
    #[serde(default)]
    pub duration: Option<String>,
    /// Temperature in Celsius
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<i32>,
    /// Ingredient ids or earlier states consumed by this step
    #[serde(default)]
    pub uses: Vec<String>,
    /// State emitted by this step
    #[serde(default)]
    pub produces: Option<String>,
    /// Tools needed by this step
    #[serde(default)]
    pub requires: Vec<String>,
    /// Sub-recipe tag; untagged steps belong to "main"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_recipe: Option<String>,
    /// Visual indicator of completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_cue: Option<String>,
}

impl Step {
    /// Create an active step with no duration
    #[must_use]
    pub fn new(id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            action: action.into(),
            step_type: String::new(),
            is_passive: false,
            duration: None,
            temperature: None,
            uses: Vec::new(),
            produces: None,
            requires: Vec::new(),
            sub_recipe: None,
            visual_cue: None,
        }
    }

    /// Set consumed references
    #[must_use]
    pub fn using<I, S>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.uses = refs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the produced state
    #[must_use]
    pub fn producing(mut self, state: impl Into<String>) -> Self {
        self.produces = Some(state.into());
        self
    }

    /// Place the step in a sub-recipe
    #[must_use]
    pub fn in_sub_recipe(mut self, sub_recipe: impl Into<String>) -> Self {
        self.sub_recipe = Some(sub_recipe.into());
        self
    }

    /// Set the ISO-8601 duration
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    /// Mark the step passive
    #[must_use]
    pub const fn passive(mut self) -> Self {
        self.is_passive = true;
        self
    }

    /// Produced state, treating an empty string as absent
    #[must_use]
    pub fn produced_state(&self) -> Option<&str> {
        self.produces.as_deref().filter(|state| !state.is_empty())
    }
}

/// A complete authored recipe
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Identification and classification
    #[serde(default)]
    pub metadata: RecipeMetadata,
    /// Declared raw ingredients
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Steps in authoring order
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Special equipment
    #[serde(default)]
    pub tools: Vec<String>,
    /// State representing the finished dish
    #[serde(default)]
    pub final_state: String,
    /// Tips and variations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Recipe {
    /// Create an empty recipe with a title and base servings
    #[must_use]
    pub fn new(title: impl Into<String>, servings: u32) -> Self {
        Self {
            metadata: RecipeMetadata {
                title: title.into(),
                servings,
                ..RecipeMetadata::default()
            },
            ..Self::default()
        }
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Add a step
    #[must_use]
    pub fn with_step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Set the final state
    #[must_use]
    pub fn with_final_state(mut self, state: impl Into<String>) -> Self {
        self.final_state = state.into();
        self
    }
}
