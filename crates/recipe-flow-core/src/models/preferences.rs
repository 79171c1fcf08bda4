// ABOUTME: Display preferences passed explicitly into the transform
// ABOUTME: UnitSystem (metric/imperial) and GroupBy (sub-recipe/category) selectors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Measurement system used to render amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Units as authored (g, ml, ...)
    #[default]
    Metric,
    /// Mass and volume converted to oz, lb, fl oz, cup, qt
    Imperial,
}

impl UnitSystem {
    /// Lowercase name as used in configuration and JSON
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" | "us" => Ok(Self::Imperial),
            other => Err(AppError::invalid_input(format!(
                "unknown unit system '{other}' (expected metric or imperial)"
            ))),
        }
    }
}

/// How the ingredient list is grouped for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// One group per sub-recipe, in sub-recipe order (normal mode)
    #[default]
    SubRecipe,
    /// One group per category, in category priority order (shopping mode)
    Category,
}

impl GroupBy {
    /// Grouping implied by the shopping-mode toggle
    #[must_use]
    pub const fn for_shopping_mode(shopping_mode: bool) -> Self {
        if shopping_mode {
            Self::Category
        } else {
            Self::SubRecipe
        }
    }

    /// Whether this grouping is the shopping-list mode
    #[must_use]
    pub const fn is_shopping_mode(&self) -> bool {
        matches!(self, Self::Category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_system_parsing() {
        assert_eq!("metric".parse::<UnitSystem>().unwrap(), UnitSystem::Metric);
        assert_eq!(" Imperial ".parse::<UnitSystem>().unwrap(), UnitSystem::Imperial);
        assert!("cubits".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn test_group_by_follows_shopping_mode() {
        assert_eq!(GroupBy::for_shopping_mode(true), GroupBy::Category);
        assert_eq!(GroupBy::for_shopping_mode(false), GroupBy::SubRecipe);
        assert!(GroupBy::Category.is_shopping_mode());
    }
}
