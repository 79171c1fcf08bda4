// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors
// ABOUTME: Output formatting helpers for recipe-flow
// ABOUTME: Provides consistent text rendering for reports, sub-recipes, lists, and time

use recipe_flow::duration::{format_compact, step_minutes, TimeSummary};
use recipe_flow::graph::ValidationReport;
use recipe_flow::models::{Recipe, StepInput, SubRecipe, UnitSystem};
use recipe_flow::units::format_temperature;
use recipe_flow::view::RecipeView;

const RULE_WIDTH: usize = 60;

fn print_heading(title: &str) {
    println!("{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Display validation errors and warnings
pub fn display_report(title: &str, report: &ValidationReport) {
    print_heading(title);

    if report.errors.is_empty() && report.warnings.is_empty() {
        println!("OK: step graph is valid");
        return;
    }

    for error in &report.errors {
        println!("ERROR   {error}");
    }
    for warning in &report.warnings {
        println!("WARNING {warning}");
    }

    println!(
        "\n{} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );
}

/// Display each sub-recipe with its steps and resolved inputs
pub fn display_sub_recipes(title: &str, sub_recipes: &[SubRecipe], system: UnitSystem) {
    print_heading(title);

    for sub_recipe in sub_recipes {
        println!("\n[{}] {}", sub_recipe.id, sub_recipe.title);
        println!("{}", "-".repeat(RULE_WIDTH));

        for (position, step) in sub_recipe.steps.iter().enumerate() {
            let mode = if step.is_passive { " (passive)" } else { "" };
            let time = step
                .time
                .as_deref()
                .map_or_else(String::new, |time| format!(" {time}"));
            let heat = step.temperature.map_or_else(String::new, |celsius| {
                format!(" at {}", format_temperature(celsius, system))
            });
            println!("{:>3}. {}{time}{heat}{mode}", position + 1, step.action);

            for input in &step.inputs {
                match input {
                    StepInput::Component(component) => println!(
                        "       <- {} [{}]",
                        component.reference, component.category
                    ),
                    StepInput::State(state) => println!("       <- {} (state)", state.name),
                }
            }
            if let Some(output) = &step.output {
                println!("       -> {}", output.name);
            }
            if !step.tools.is_empty() {
                println!("       tools: {}", step.tools.join(", "));
            }
        }
    }
}

/// Display ingredient groups column by column
pub fn display_columns(view: &RecipeView) {
    print_heading(&format!(
        "{} - {} servings ({})",
        view.title, view.servings, view.unit_system
    ));

    for (index, column) in view.columns.iter().enumerate() {
        if column.is_empty() {
            continue;
        }
        println!("\nColumn {}", index + 1);
        println!("{}", "-".repeat(RULE_WIDTH));

        for group in column {
            println!("{}", group.title);
            for item in &group.items {
                let marker = if item.is_unused { " (unused)" } else { "" };
                println!("  [ ] {}{marker}", item.clipboard_line());
            }
        }
    }
}

/// Display per-step durations and the totals
pub fn display_time(recipe: &Recipe, summary: &TimeSummary) {
    print_heading(&recipe.metadata.title);

    for step in &recipe.steps {
        let minutes = step_minutes(step);
        if minutes > 0 {
            let mode = if step.is_passive { "passive" } else { "active" };
            println!("{:>8}  {mode:<7}  {}", format_compact(minutes), step.action);
        }
    }

    println!("{}", "-".repeat(RULE_WIDTH));
    println!("Active:  {}", format_compact(summary.active_minutes));
    println!("Passive: {}", format_compact(summary.passive_minutes));
    println!("Total:   {}", summary.total_label());
}
