// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors
// ABOUTME: Helper modules for recipe-flow
// ABOUTME: Recipe loading with validation and text output formatting

pub mod display;
pub mod input;
