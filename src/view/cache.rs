// ABOUTME: LRU memoization of recipe views keyed by recipe id and display choices
// ABOUTME: Owned by one caller, so lookups take &mut self and need no locks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use serde::Serialize;
use tracing::debug;

use crate::config::ViewConfig;
use crate::models::{Recipe, UnitSystem};

use super::{build_view, RecipeView, ViewRequest};

/// Identity of one memoized view
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewKey {
    /// Caller-chosen recipe identity
    pub recipe_id: String,
    /// Unit system
    pub unit_system: UnitSystem,
    /// Servings after defaulting to the recipe's own
    pub servings: u32,
    /// Category grouping on or off
    pub shopping_mode: bool,
    /// Column layout
    pub column_count: usize,
}

impl ViewKey {
    /// Key for `request` against `recipe`
    #[must_use]
    pub fn new(recipe_id: &str, recipe: &Recipe, request: &ViewRequest) -> Self {
        Self {
            recipe_id: recipe_id.to_owned(),
            unit_system: request.unit_system,
            servings: request.effective_servings(recipe),
            shopping_mode: request.shopping_mode,
            column_count: request.column_count.max(1),
        }
    }
}

/// Hit and miss counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CacheStats {
    /// Lookups answered from the store
    pub hits: u64,
    /// Lookups that built a new view
    pub misses: u64,
    /// Views currently stored
    pub entries: usize,
    /// Maximum stored views
    pub capacity: usize,
}

/// Memoized `build_view`
///
/// A recipe is identified by the id the caller passes in. When a recipe's
/// content changes under the same id, call `invalidate` first.
pub struct RecipeViewCache {
    store: LruCache<ViewKey, Arc<RecipeView>>,
    hits: u64,
    misses: u64,
}

impl RecipeViewCache {
    /// Cache holding at most `capacity` views
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            store: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Cache sized from configuration
    #[must_use]
    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(config.cache_capacity())
    }

    /// Stored view for the key, building and storing it on a miss
    pub fn get_or_build(
        &mut self,
        recipe_id: &str,
        recipe: &Recipe,
        request: &ViewRequest,
    ) -> Arc<RecipeView> {
        let key = ViewKey::new(recipe_id, recipe, request);

        // LruCache::get is mutable (updates access order for LRU)
        if let Some(view) = self.store.get(&key) {
            self.hits += 1;
            return Arc::clone(view);
        }

        self.misses += 1;
        debug!(recipe_id, servings = key.servings, "Recipe view cache miss");
        let view = Arc::new(build_view(recipe, request));
        self.store.put(key, Arc::clone(&view));
        view
    }

    /// Drop every stored view of a recipe, returning how many were removed
    pub fn invalidate(&mut self, recipe_id: &str) -> usize {
        // Collect keys first (can't modify while iterating)
        let keys: Vec<ViewKey> = self
            .store
            .iter()
            .filter(|(key, _)| key.recipe_id == recipe_id)
            .map(|(key, _)| key.clone())
            .collect();

        for key in &keys {
            self.store.pop(key);
        }
        keys.len()
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Current counters
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.store.len(),
            capacity: self.store.cap().get(),
        }
    }
}
