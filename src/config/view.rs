// ABOUTME: Display defaults for recipe views loaded from environment variables
// ABOUTME: Unit system, column count, shopping mode, and view cache capacity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use std::env;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::view::{DEFAULT_COLUMN_COUNT, DEFAULT_VIEW_CACHE_CAPACITY};
use crate::models::{GroupBy, UnitSystem};

/// Environment variable selecting `metric` or `imperial`
pub const UNIT_SYSTEM_ENV: &str = "RECIPE_UNIT_SYSTEM";
/// Environment variable for the ingredient column count
pub const COLUMN_COUNT_ENV: &str = "RECIPE_COLUMN_COUNT";
/// Environment variable for the number of memoized views
pub const CACHE_CAPACITY_ENV: &str = "RECIPE_VIEW_CACHE_CAPACITY";
/// Environment variable turning shopping mode on (`true`/`1`)
pub const SHOPPING_MODE_ENV: &str = "RECIPE_SHOPPING_MODE";

/// Recipe view defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    /// Unit system amounts are rendered in
    pub unit_system: UnitSystem,
    /// Number of ingredient columns (at least 1)
    pub column_count: usize,
    /// Maximum memoized views (at least 1)
    pub cache_capacity: usize,
    /// Group by category instead of sub-recipe
    pub shopping_mode: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::default(),
            column_count: DEFAULT_COLUMN_COUNT,
            cache_capacity: DEFAULT_VIEW_CACHE_CAPACITY,
            shopping_mode: false,
        }
    }
}

impl ViewConfig {
    /// Load view configuration from environment
    ///
    /// Unset variables take their default. Unparseable values are logged at
    /// `warn` and also fall back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            unit_system: env_parse(UNIT_SYSTEM_ENV).unwrap_or(defaults.unit_system),
            column_count: env_parse::<NonZeroUsize>(COLUMN_COUNT_ENV)
                .map_or(defaults.column_count, NonZeroUsize::get),
            cache_capacity: env_parse::<NonZeroUsize>(CACHE_CAPACITY_ENV)
                .map_or(defaults.cache_capacity, NonZeroUsize::get),
            shopping_mode: env::var(SHOPPING_MODE_ENV)
                .ok()
                .and_then(|value| parse_flag(&value, SHOPPING_MODE_ENV))
                .unwrap_or(defaults.shopping_mode),
        }
    }

    /// Grouping implied by `shopping_mode`
    #[must_use]
    pub const fn group_by(&self) -> GroupBy {
        GroupBy::for_shopping_mode(self.shopping_mode)
    }

    /// Cache capacity as the non-zero size the LRU store needs
    #[must_use]
    pub fn cache_capacity(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.cache_capacity).unwrap_or(NonZeroUsize::MIN)
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        warn!(key, value = %raw, "Ignoring invalid configuration value, using default");
    }
    parsed
}

fn parse_flag(value: &str, key: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => {
            warn!(key, value, "Ignoring invalid boolean flag, using default");
            None
        }
    }
}
