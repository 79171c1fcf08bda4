// ABOUTME: Recipe Flow CLI - inspect authored recipe files from the command line
// ABOUTME: Validates step graphs, prints sub-recipes, shopping lists, and total time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors
//!
//! Usage:
//! ```bash
//! # Check a recipe's step graph
//! recipe-flow validate blanquette.json
//!
//! # Print the sub-recipe breakdown as JSON
//! recipe-flow --json structure blanquette.json
//!
//! # Shopping list for 8 people, grouped by aisle, in imperial units
//! recipe-flow shopping blanquette.json --servings 8 --units imperial --by-category
//!
//! # Plain-text list ready to paste
//! recipe-flow copy blanquette.json --by-category
//!
//! # Active and passive time
//! recipe-flow time blanquette.json
//! ```
//!
//! Pass `-` as the file to read the recipe from stdin.

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use recipe_flow::config::ViewConfig;
use recipe_flow::errors::{AppError, AppResult};
use recipe_flow::logging::LoggingConfig;
use recipe_flow::models::UnitSystem;
use recipe_flow::view::ViewRequest;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "recipe-flow",
    about = "Recipe step-graph inspection CLI",
    long_about = "Validate authored recipes and print their sub-recipes, scaled shopping lists, and cooking time."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Display choices shared by the list commands
#[derive(Args)]
struct DisplayArgs {
    /// Servings to scale to (defaults to the recipe's own)
    #[arg(long, short = 's')]
    servings: Option<u32>,

    /// Unit system: metric or imperial (defaults to `RECIPE_UNIT_SYSTEM`)
    #[arg(long, short = 'u')]
    units: Option<UnitSystem>,

    /// Group by shopping category instead of sub-recipe
    #[arg(long)]
    by_category: bool,

    /// Number of columns (defaults to `RECIPE_COLUMN_COUNT`)
    #[arg(long, short = 'c')]
    columns: Option<usize>,
}

impl DisplayArgs {
    /// Command-line choices layered over environment configuration
    fn into_request(self, config: &ViewConfig) -> ViewRequest {
        let mut request = ViewRequest::from_config(config);
        if let Some(servings) = self.servings {
            request = request.with_servings(servings);
        }
        if let Some(units) = self.units {
            request = request.with_unit_system(units);
        }
        if self.by_category {
            request = request.with_shopping_mode(true);
        }
        if let Some(columns) = self.columns {
            request.column_count = columns;
        }
        request
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Check the step graph and list errors and warnings
    Validate {
        /// Recipe JSON file
        file: PathBuf,
    },

    /// Print sub-recipes with their resolved steps
    Structure {
        /// Recipe JSON file
        file: PathBuf,

        /// Unit system for temperatures (defaults to `RECIPE_UNIT_SYSTEM`)
        #[arg(long, short = 'u')]
        units: Option<UnitSystem>,
    },

    /// Print the scaled ingredient list laid out in columns
    Shopping {
        /// Recipe JSON file
        file: PathBuf,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Print the ingredient list as plain lines for the clipboard
    Copy {
        /// Recipe JSON file
        file: PathBuf,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Print active, passive, and total cooking time
    Time {
        /// Recipe JSON file
        file: PathBuf,
    },
}

fn run(cli: Cli) -> Result<()> {
    let config = ViewConfig::from_env();

    match cli.command {
        Command::Validate { file } => commands::validate::run(&file, cli.json),
        Command::Structure { file, units } => {
            commands::structure::run(&file, units.unwrap_or(config.unit_system), cli.json)
        }
        Command::Shopping { file, display } => {
            commands::shopping::list(&file, &display.into_request(&config), cli.json)
        }
        Command::Copy { file, display } => {
            commands::shopping::copy(&file, &display.into_request(&config))
        }
        Command::Time { file } => commands::time::run(&file, cli.json),
    }
}

fn report_error(error: &AppError) -> ExitCode {
    eprintln!("Error: {error}");
    if !error.details.is_null() {
        if let Ok(details) = serde_json::to_string_pretty(&error.details) {
            eprintln!("{details}");
        }
    }
    ExitCode::from(u8::try_from(error.code.exit_code()).unwrap_or(1))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging failures are not fatal for a one-shot command
    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("Warning: logging not initialized: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_error(&error),
    }
}
