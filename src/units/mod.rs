// ABOUTME: Unit handling for ingredient display: conversion, scaling, and formatting
// ABOUTME: Everything here is pure and total; bad input degrades to a safe display value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

//! # Units
//!
//! Amounts are stored as authored for the recipe's base servings. Display
//! goes through three steps: scale by the servings ratio, convert to the
//! active unit system, round to two decimals.

/// Metric-to-imperial conversion
pub mod conversion;

/// Amount and temperature rendering
pub mod formatter;

/// Servings ratio and quantity scaling
pub mod scaling;

pub use conversion::{celsius_to_fahrenheit, to_imperial, Measure, MetricUnit};
pub use formatter::{format_amount, format_temperature, round_amount};
pub use scaling::{sanitize_ratio, scale, scale_ratio};
