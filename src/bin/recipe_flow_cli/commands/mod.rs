// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors
// ABOUTME: Command modules for recipe-flow
// ABOUTME: Validate, structure, shopping, and time subcommand implementations

pub mod shopping;
pub mod structure;
pub mod time;
pub mod validate;
