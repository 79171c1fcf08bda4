// ABOUTME: ISO-8601 step duration parsing and total-time computation
// ABOUTME: Parses PTnHnM, splits active from passive time, and renders compact labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

//! Step durations
//!
//! Steps carry durations as ISO-8601 strings restricted to hours and minutes
//! (`PT15M`, `PT1H30M`). A missing duration means the step has no fixed
//! length. Malformed values are reported by graph validation and count as
//! zero everywhere else.

use std::fmt::{self, Display, Formatter};
use std::sync::LazyLock;

use regex::{Match, Regex};
use serde::Serialize;
use tracing::warn;

use crate::constants::durations::{DISPLAY_ROUNDING_MINUTES, MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::errors::GraphError;
use crate::models::{Recipe, Step};

static ISO_DURATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?$").ok());

/// A parsed `PTnHnM` duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct IsoDuration {
    hours: u32,
    minutes: u32,
}

impl IsoDuration {
    /// Build from hour and minute components
    #[must_use]
    pub const fn new(hours: u32, minutes: u32) -> Self {
        Self { hours, minutes }
    }

    /// Parse an ISO-8601 duration with optional hour and minute components
    ///
    /// # Errors
    ///
    /// Returns `GraphError::MalformedDuration` (with an empty step id) when the
    /// value does not match `PT(nH)?(nM)?` or carries neither component.
    pub fn parse(value: &str) -> Result<Self, GraphError> {
        Self::parse_for_step("", value)
    }

    /// Parse a duration attributed to `step_id` for error reporting
    ///
    /// # Errors
    ///
    /// Returns `GraphError::MalformedDuration` naming the step and raw value.
    pub fn parse_for_step(step_id: &str, value: &str) -> Result<Self, GraphError> {
        let malformed = || GraphError::MalformedDuration {
            step_id: step_id.to_owned(),
            value: value.to_owned(),
        };

        let captures = ISO_DURATION
            .as_ref()
            .and_then(|pattern| pattern.captures(value))
            .ok_or_else(malformed)?;

        let hours = captures.get(1);
        let minutes = captures.get(2);
        if hours.is_none() && minutes.is_none() {
            return Err(malformed());
        }

        let component = |m: Option<Match<'_>>| -> Result<u32, GraphError> {
            m.map_or(Ok(0), |m| m.as_str().parse().map_err(|_| malformed()))
        };

        Ok(Self {
            hours: component(hours)?,
            minutes: component(minutes)?,
        })
    }

    /// Total length in minutes
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.hours
            .saturating_mul(MINUTES_PER_HOUR)
            .saturating_add(self.minutes)
    }
}

impl Display for IsoDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("PT")?;
        if self.hours > 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes > 0 || self.hours == 0 {
            write!(f, "{}M", self.minutes)?;
        }
        Ok(())
    }
}

/// Duration of a step in minutes; absent or malformed durations count as zero
#[must_use]
pub fn step_minutes(step: &Step) -> u32 {
    let Some(raw) = step.duration.as_deref() else {
        return 0;
    };
    match IsoDuration::parse_for_step(&step.id, raw) {
        Ok(duration) => duration.minutes(),
        Err(error) => {
            warn!(step = %step.id, %error, "Ignoring malformed step duration");
            0
        }
    }
}

/// Time split between attended and unattended steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSummary {
    /// Minutes of steps needing attention
    pub active_minutes: u32,
    /// Minutes of steps that can be left alone
    pub passive_minutes: u32,
    /// Sum of both
    pub total_minutes: u32,
}

impl TimeSummary {
    /// Compact label for the total (`1h 30m`)
    #[must_use]
    pub fn total_label(&self) -> String {
        format_compact(self.total_minutes)
    }
}

/// Sum step durations, split by step mode
#[must_use]
pub fn total_time(recipe: &Recipe) -> TimeSummary {
    recipe
        .steps
        .iter()
        .fold(TimeSummary::default(), |mut summary, step| {
            let minutes = step_minutes(step);
            if step.is_passive {
                summary.passive_minutes = summary.passive_minutes.saturating_add(minutes);
            } else {
                summary.active_minutes = summary.active_minutes.saturating_add(minutes);
            }
            summary.total_minutes = summary.total_minutes.saturating_add(minutes);
            summary
        })
}

/// Compact human label, rounded to the nearest five minutes
///
/// ```text
/// 0    -> "0m"
/// 43   -> "45m"
/// 60   -> "1h"
/// 90   -> "1h 30m"
/// 1620 -> "1d 3h"
/// ```
///
/// Past a day, minutes are dropped and only days and hours are shown.
#[must_use]
pub fn format_compact(minutes: u32) -> String {
    let half = DISPLAY_ROUNDING_MINUTES / 2;
    let rounded = minutes.saturating_add(half) / DISPLAY_ROUNDING_MINUTES * DISPLAY_ROUNDING_MINUTES;

    if rounded == 0 {
        return "0m".to_owned();
    }

    let days = rounded / MINUTES_PER_DAY;
    let hours = (rounded % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
    let mins = rounded % MINUTES_PER_HOUR;

    if days > 0 {
        return if hours > 0 {
            format!("{days}d {hours}h")
        } else {
            format!("{days}d")
        };
    }

    match (hours, mins) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
