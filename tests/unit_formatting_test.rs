// ABOUTME: Integration tests for amount scaling, unit conversion, and time labels
// ABOUTME: Exercises the public formatting API the way a recipe renderer calls it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use recipe_flow::duration::{format_compact, step_minutes, total_time, IsoDuration};
use recipe_flow::models::UnitSystem;
use recipe_flow::units::{
    format_amount, format_temperature, scale, scale_ratio, to_imperial, MetricUnit,
};

// ============================================================================
// Amount Formatting
// ============================================================================

#[test]
fn test_format_amount_never_prints_zero_for_to_taste() {
    for system in [UnitSystem::Metric, UnitSystem::Imperial] {
        assert_eq!(format_amount(None, None, 1.0, system), "");
        assert_eq!(format_amount(None, Some("g"), 3.0, system), "");
    }
}

#[test]
fn test_count_units_pass_through_imperial() {
    assert_eq!(format_amount(Some(6.0), Some("pieces"), 1.0, UnitSystem::Imperial), "6 pieces");
    assert_eq!(format_amount(Some(1.0), Some("tsp"), 2.0, UnitSystem::Imperial), "2 tsp");
    assert_eq!(format_amount(Some(3.0), Some("unit"), 1.0, UnitSystem::Imperial), "3 unit");
}

#[test]
fn test_large_volumes_switch_to_cups() {
    assert_eq!(format_amount(Some(200.0), Some("ml"), 2.0, UnitSystem::Imperial), "1.69 cup");
    assert_eq!(format_amount(Some(50.0), Some("ml"), 1.0, UnitSystem::Imperial), "1.69 fl oz");
}

#[test]
fn test_litres_and_kilograms() {
    assert_eq!(format_amount(Some(1.0), Some("L"), 1.0, UnitSystem::Imperial), "1.06 qt");
    assert_eq!(format_amount(Some(2.0), Some("kg"), 1.0, UnitSystem::Imperial), "4.41 lb");
    assert_eq!(format_amount(Some(1.5), Some("kg"), 1.0, UnitSystem::Metric), "1.5 kg");
}

#[test]
fn test_unit_aliases_convert() {
    assert_eq!(MetricUnit::parse("grams"), Some(MetricUnit::Gram));
    assert_eq!(MetricUnit::parse("mL"), Some(MetricUnit::Millilitre));
    let measure = to_imperial(20.0, Some("cm"));
    assert_eq!(measure.unit.as_deref(), Some("in"));
    assert!((measure.value - 7.874_02).abs() < 1e-4);
}

#[test]
fn test_oven_temperature() {
    assert_eq!(format_temperature(180, UnitSystem::Metric), "180°C");
    assert_eq!(format_temperature(180, UnitSystem::Imperial), "356°F");
    assert_eq!(format_temperature(220, UnitSystem::Imperial), "428°F");
}

// ============================================================================
// Scaling
// ============================================================================

#[test]
fn test_scale_ratio_from_servings() {
    assert!((scale_ratio(4, 8) - 2.0).abs() < f64::EPSILON);
    assert!((scale_ratio(6, 3) - 0.5).abs() < f64::EPSILON);
    assert!((scale_ratio(0, 4) - 1.0).abs() < f64::EPSILON);
    assert!((scale_ratio(4, 0) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_scale_keeps_absent_amounts_absent() {
    assert_eq!(scale(None, 2.0), None);
    assert_eq!(scale(Some(40.0), 2.0), Some(80.0));
}

// ============================================================================
// Durations and Time
// ============================================================================

#[test]
fn test_iso_durations() {
    let duration = IsoDuration::parse("PT1H30M").unwrap();
    assert_eq!(duration.minutes(), 90);
    assert_eq!(duration.to_string(), "PT1H30M");
    assert_eq!(IsoDuration::parse("PT45M").unwrap().minutes(), 45);
    assert_eq!(IsoDuration::parse("PT2H").unwrap().to_string(), "PT2H");
    assert!(IsoDuration::parse("PT").is_err());
    assert!(IsoDuration::parse("P1D").is_err());
    assert!(IsoDuration::parse("1h30").is_err());
}

#[test]
fn test_step_minutes_of_fixture() {
    let recipe = common::blanquette();
    let minutes: Vec<u32> = recipe.steps.iter().map(step_minutes).collect();
    assert_eq!(minutes, vec![15, 90, 5, 10]);
}

#[test]
fn test_total_time_splits_active_and_passive() {
    let summary = total_time(&common::tarte());

    assert_eq!(summary.active_minutes, 25);
    assert_eq!(summary.passive_minutes, 65);
    assert_eq!(summary.total_minutes, 90);
    assert_eq!(summary.total_label(), "1h 30m");
}

#[test]
fn test_step_without_duration_counts_zero() {
    let summary = total_time(&common::seasoned_blanquette());
    assert_eq!(summary.total_minutes, 120);
    assert_eq!(format_compact(summary.total_minutes), "2h");
}

#[test]
fn test_compact_labels() {
    assert_eq!(format_compact(0), "0m");
    assert_eq!(format_compact(2), "0m");
    assert_eq!(format_compact(43), "45m");
    assert_eq!(format_compact(125), "2h 5m");
    assert_eq!(format_compact(1_440), "1d");
}
