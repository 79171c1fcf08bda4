// ABOUTME: Renders scaled ingredient amounts and temperatures for display
// ABOUTME: Applies the servings ratio, unit system, metric promotion, and two-decimal rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use tracing::warn;

use crate::constants::units::{DISPLAY_DECIMALS, METRIC_PROMOTION_THRESHOLD};
use crate::models::UnitSystem;

use super::conversion::{celsius_to_fahrenheit, to_imperial, Measure, MetricUnit};
use super::scaling::sanitize_ratio;

/// Display string for an ingredient amount
///
/// ```text
/// format_amount(Some(800.0), Some("g"), 1.0, Metric)   -> "800 g"
/// format_amount(Some(800.0), Some("g"), 1.5, Metric)   -> "1.2 kg"
/// format_amount(Some(100.0), Some("g"), 1.0, Imperial) -> "3.53 oz"
/// format_amount(Some(2.0), None, 1.0, Metric)          -> "2"
/// format_amount(None, Some("g"), 2.0, Imperial)        -> ""
/// ```
///
/// Never fails: an absent or non-finite amount renders as an empty string.
#[must_use]
pub fn format_amount(
    amount: Option<f64>,
    unit: Option<&str>,
    scale_ratio: f64,
    system: UnitSystem,
) -> String {
    let Some(amount) = amount else {
        return String::new();
    };
    if !amount.is_finite() {
        warn!(amount, "Skipping non-finite ingredient amount");
        return String::new();
    }

    let scaled = amount * sanitize_ratio(scale_ratio);
    let unit = unit.filter(|u| !u.trim().is_empty());
    let measure = match system {
        UnitSystem::Metric => promote_metric(scaled, unit),
        UnitSystem::Imperial => to_imperial(scaled, unit),
    };

    render(&measure)
}

/// Display string for a step temperature authored in Celsius
#[must_use]
pub fn format_temperature(celsius: i32, system: UnitSystem) -> String {
    match system {
        UnitSystem::Metric => format!("{celsius}°C"),
        UnitSystem::Imperial => {
            let fahrenheit = celsius_to_fahrenheit(f64::from(celsius)).round();
            format!("{}°F", normalize_zero(fahrenheit))
        }
    }
}

/// Round to two decimal places, mapping `-0` to `0`
#[must_use]
pub fn round_amount(value: f64) -> f64 {
    let factor = 10_f64.powi(DISPLAY_DECIMALS);
    normalize_zero((value * factor).round() / factor)
}

fn normalize_zero(value: f64) -> f64 {
    if value.abs() < f64::EPSILON {
        0.0
    } else {
        value
    }
}

fn promote_metric(value: f64, unit: Option<&str>) -> Measure {
    let promoted = match unit.and_then(MetricUnit::parse) {
        Some(MetricUnit::Gram) if value >= METRIC_PROMOTION_THRESHOLD => Some(MetricUnit::Kilogram),
        Some(MetricUnit::Millilitre) if value >= METRIC_PROMOTION_THRESHOLD => {
            Some(MetricUnit::Litre)
        }
        _ => None,
    };

    promoted.map_or_else(
        || Measure::new(value, unit),
        |larger| Measure::new(value / METRIC_PROMOTION_THRESHOLD, Some(larger.symbol())),
    )
}

fn render(measure: &Measure) -> String {
    let value = round_amount(measure.value);
    match measure.unit.as_deref() {
        Some(unit) => format!("{value} {unit}"),
        None => format!("{value}"),
    }
}
