// ABOUTME: Turns aggregated rows into display groups, balanced columns, and clipboard text
// ABOUTME: Check state lives in a caller-owned CheckedIngredients set, never in the rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::constants::categories::category_label;
use crate::models::{AggregatedIngredient, GroupBy, IngredientGroup};

use super::aggregator::{compare_categories, compare_for_shopping};

/// Group rows for display
///
/// `SubRecipe` keeps the rows' order and opens a group per sub-recipe in
/// first-seen order. `Category` opens a group per category in shopping
/// priority order with names sorted inside each group.
#[must_use]
pub fn build_groups(aggregated: &[AggregatedIngredient], group_by: GroupBy) -> Vec<IngredientGroup> {
    match group_by {
        GroupBy::SubRecipe => collect_groups(aggregated.iter(), |row| {
            (row.sub_recipe_id.clone(), row.sub_recipe_title.clone())
        }),
        GroupBy::Category => {
            let mut sorted: Vec<&AggregatedIngredient> = aggregated.iter().collect();
            sorted.sort_by(|a, b| compare_for_shopping(a, b));
            let mut groups = collect_groups(sorted.into_iter(), |row| {
                (row.category.clone(), category_label(&row.category))
            });
            groups.sort_by(|a, b| compare_categories(&a.key, &b.key));
            groups
        }
    }
}

fn collect_groups<'a, I, F>(rows: I, key_of: F) -> Vec<IngredientGroup>
where
    I: Iterator<Item = &'a AggregatedIngredient>,
    F: Fn(&AggregatedIngredient) -> (String, String),
{
    let mut groups: Vec<IngredientGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let (key, title) = key_of(row);
        let position = match positions.get(&key) {
            Some(position) => *position,
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push(IngredientGroup {
                    key,
                    title,
                    items: Vec::new(),
                });
                groups.len() - 1
            }
        };
        groups[position].items.push(row.clone());
    }

    groups
}

/// Distribute groups over `column_count` columns without splitting any group
///
/// Columns are contiguous runs of groups, so reading each column top to
/// bottom, left to right, gives back the input order. The split minimizes the
/// tallest column (in rows) and then spreads groups so no column is left
/// empty while another holds several groups. Always returns exactly
/// `column_count` columns; `0` is treated as `1`.
#[must_use]
pub fn build_columns(groups: &[IngredientGroup], column_count: usize) -> Vec<Vec<IngredientGroup>> {
    let column_count = column_count.max(1);
    let weights: Vec<usize> = groups.iter().map(IngredientGroup::len).collect();
    let capacity = min_column_height(&weights, column_count);

    let mut columns: Vec<Vec<IngredientGroup>> = vec![Vec::new(); column_count];
    let mut current = 0;
    let mut height = 0;

    for (index, group) in groups.iter().enumerate() {
        let remaining_groups = groups.len() - index;
        let columns_after = column_count - 1 - current;
        let column_started = !columns[current].is_empty();
        let overflows = height + weights[index] > capacity;
        if column_started && columns_after > 0 && (overflows || remaining_groups <= columns_after) {
            current += 1;
            height = 0;
        }
        height += weights[index];
        columns[current].push(group.clone());
    }

    columns
}

/// Smallest column height that fits every group into `column_count` contiguous columns
fn min_column_height(weights: &[usize], column_count: usize) -> usize {
    let mut low = weights.iter().copied().max().unwrap_or(0);
    let mut high = weights.iter().sum::<usize>();

    while low < high {
        let mid = low + (high - low) / 2;
        if columns_needed(weights, mid) <= column_count {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    low
}

fn columns_needed(weights: &[usize], capacity: usize) -> usize {
    let mut columns = 1;
    let mut height = 0;
    for &weight in weights {
        if height + weight > capacity && height > 0 {
            columns += 1;
            height = 0;
        }
        height += weight;
    }
    columns
}

/// Clipboard text: one `"{displayAmount} {name}"` line per row, in display order
///
/// Unused rows are shown in normal mode but are not bought, so they are left out.
#[must_use]
pub fn copy_to_clipboard(aggregated: &[AggregatedIngredient]) -> String {
    aggregated
        .iter()
        .filter(|row| !row.is_unused)
        .map(AggregatedIngredient::clipboard_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Caller-owned set of checked-off shopping rows
///
/// Keys follow `AggregatedIngredient::check_key` (`"{subRecipeId}-{name}"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckedIngredients {
    keys: BTreeSet<String>,
}

impl CheckedIngredients {
    /// Empty check set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a row's check state, returning whether it is now checked
    pub fn toggle(&mut self, row: &AggregatedIngredient) -> bool {
        self.toggle_key(row.check_key())
    }

    /// Flip the check state of a raw key, returning whether it is now checked
    pub fn toggle_key(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    /// Whether a row is checked
    #[must_use]
    pub fn is_checked(&self, row: &AggregatedIngredient) -> bool {
        self.keys.contains(&row.check_key())
    }

    /// Rows still to buy: neither checked nor unused
    #[must_use]
    pub fn remaining(&self, aggregated: &[AggregatedIngredient]) -> usize {
        aggregated
            .iter()
            .filter(|row| !row.is_unused && !self.is_checked(row))
            .count()
    }

    /// Number of checked keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing is checked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Uncheck everything
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sub: &str, name: &str, category: &str, amount: &str) -> AggregatedIngredient {
        AggregatedIngredient {
            reference: name.to_lowercase(),
            name: name.to_owned(),
            category: category.to_owned(),
            amount: None,
            unit: None,
            display_amount: amount.to_owned(),
            is_unused: false,
            sub_recipe_id: sub.to_owned(),
            sub_recipe_title: sub.to_uppercase(),
        }
    }

    fn group_of(key: &str, size: usize) -> IngredientGroup {
        IngredientGroup {
            key: key.to_owned(),
            title: key.to_owned(),
            items: (0..size).map(|i| row(key, &format!("item{i}"), "other", "")).collect(),
        }
    }

    fn keys(columns: &[Vec<IngredientGroup>]) -> Vec<Vec<&str>> {
        columns
            .iter()
            .map(|column| column.iter().map(|g| g.key.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_groups_by_sub_recipe_keep_order() {
        let rows = vec![
            row("pate", "Farine", "pantry", "250 g"),
            row("pate", "Beurre", "dairy", "125 g"),
            row("garniture", "Pommes", "produce", "6 pieces"),
        ];

        let groups = build_groups(&rows, GroupBy::SubRecipe);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "pate");
        assert_eq!(groups[0].title, "PATE");
        assert_eq!(groups[0].items[1].name, "Beurre");
    }

    #[test]
    fn test_groups_by_category_in_priority_order() {
        let rows = vec![
            row("main", "Sucre", "pantry", ""),
            row("main", "Farine", "pantry", ""),
            row("main", "Truffe", "luxury", ""),
            row("main", "Veau", "meat", ""),
        ];

        let groups = build_groups(&rows, GroupBy::Category);

        let titles: Vec<&str> = groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Meat", "Pantry", "Luxury"]);
        assert_eq!(groups[1].items[0].name, "Farine");
    }

    #[test]
    fn test_columns_never_split_groups() {
        let groups = vec![group_of("a", 4), group_of("b", 1), group_of("c", 1), group_of("d", 2)];

        let columns = build_columns(&groups, 2);

        assert_eq!(keys(&columns), vec![vec!["a"], vec!["b", "c", "d"]]);
    }

    #[test]
    fn test_columns_spread_small_groups() {
        let groups = vec![group_of("a", 1), group_of("b", 1), group_of("c", 1), group_of("d", 1)];

        let columns = build_columns(&groups, 3);

        assert_eq!(keys(&columns), vec![vec!["a", "b"], vec!["c"], vec!["d"]]);
    }

    #[test]
    fn test_zero_columns_means_one() {
        let groups = vec![group_of("a", 2), group_of("b", 3)];

        let columns = build_columns(&groups, 0);

        assert_eq!(keys(&columns), vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_more_columns_than_groups() {
        let columns = build_columns(&[group_of("a", 2)], 3);
        assert_eq!(keys(&columns), vec![vec!["a"], vec![], vec![]]);
        assert_eq!(build_columns(&[], 2).len(), 2);
    }

    #[test]
    fn test_clipboard_lines() {
        let rows = vec![row("main", "Farine", "pantry", "250 g"), row("main", "Sel", "spice", "")];
        assert_eq!(copy_to_clipboard(&rows), "250 g Farine\nSel");
        assert_eq!(copy_to_clipboard(&[]), "");
    }

    #[test]
    fn test_clipboard_skips_unused_rows() {
        let mut unused = row("main", "Persil", "produce", "1 bunch");
        unused.is_unused = true;
        let rows = vec![row("main", "Farine", "pantry", "250 g"), unused];
        assert_eq!(copy_to_clipboard(&rows), "250 g Farine");
    }

    #[test]
    fn test_check_state() {
        let mut unused = row("main", "Persil", "produce", "1 bunch");
        unused.is_unused = true;
        let rows = vec![row("main", "Farine", "pantry", "250 g"), row("main", "Sel", "spice", ""), unused];
        let mut checked = CheckedIngredients::new();

        assert_eq!(checked.remaining(&rows), 2);
        assert!(checked.toggle(&rows[0]));
        assert!(checked.is_checked(&rows[0]));
        assert_eq!(checked.remaining(&rows), 1);
        assert!(!checked.toggle(&rows[0]));
        assert!(checked.is_empty());
        assert!(checked.toggle_key("main-Sel"));
        assert!(checked.is_checked(&rows[1]));
    }
}
