// ABOUTME: Servings-based scaling of ingredient quantities
// ABOUTME: Invalid servings fall back to a ratio of one instead of failing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

/// Ratio between desired and base servings
///
/// Zero servings on either side yield `1.0`, leaving quantities as authored.
#[must_use]
pub fn scale_ratio(base_servings: u32, desired_servings: u32) -> f64 {
    if base_servings == 0 || desired_servings == 0 {
        return 1.0;
    }
    f64::from(desired_servings) / f64::from(base_servings)
}

/// Replace a non-finite or non-positive ratio with `1.0`
#[must_use]
pub fn sanitize_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        1.0
    }
}

/// Scale a quantity; "to taste" (`None`) stays `None` at every ratio
#[must_use]
pub fn scale(amount: Option<f64>, ratio: f64) -> Option<f64> {
    amount.map(|value| value * sanitize_ratio(ratio))
}
