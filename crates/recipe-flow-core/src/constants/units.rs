// ABOUTME: Unit conversion constants for metric to imperial display
// ABOUTME: Mass and volume factors plus the thresholds that pick the larger imperial unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

/// Ounces per gram
pub const OZ_PER_GRAM: f64 = 0.035_273_96;
/// Pounds per gram
pub const LB_PER_GRAM: f64 = 0.002_204_62;
/// Pounds per kilogram
pub const LB_PER_KG: f64 = 2.204_62;
/// Grams in one pound; at or above this mass, grams display as pounds
pub const GRAMS_PER_LB: f64 = 453.592_37;

/// US fluid ounces per millilitre
pub const FL_OZ_PER_ML: f64 = 0.033_814;
/// US cups per millilitre
pub const CUPS_PER_ML: f64 = 0.004_226_75;
/// Millilitres in one US cup; at or above this volume, millilitres display as cups
pub const ML_PER_CUP: f64 = 236.588;
/// US fluid ounces per centilitre
pub const FL_OZ_PER_CL: f64 = 0.338_14;
/// US quarts per litre
pub const QUARTS_PER_L: f64 = 1.056_69;

/// Inches per centimetre
pub const IN_PER_CM: f64 = 0.393_701;
/// Inches per millimetre
pub const IN_PER_MM: f64 = 0.039_370_1;

/// Threshold at which grams and millilitres are promoted to kilograms and litres
pub const METRIC_PROMOTION_THRESHOLD: f64 = 1_000.0;

/// Decimal places kept when rendering an amount
pub const DISPLAY_DECIMALS: i32 = 2;
