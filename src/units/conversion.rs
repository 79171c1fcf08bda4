// ABOUTME: Metric unit recognition and metric-to-imperial conversion
// ABOUTME: Picks the larger imperial unit for grams and millilitres past one pound or one cup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Flow Contributors

use std::fmt::{self, Display, Formatter};

use crate::constants::units::{
    CUPS_PER_ML, FL_OZ_PER_CL, FL_OZ_PER_ML, GRAMS_PER_LB, IN_PER_CM, IN_PER_MM, LB_PER_GRAM,
    LB_PER_KG, ML_PER_CUP, OZ_PER_GRAM, QUARTS_PER_L,
};

/// Metric units that have an imperial counterpart
///
/// Everything else (`piece`, `pinch`, `tbsp`, `tsp`, `unit`, ...) is left as
/// authored in both systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricUnit {
    /// Grams
    Gram,
    /// Kilograms
    Kilogram,
    /// Millilitres
    Millilitre,
    /// Centilitres
    Centilitre,
    /// Litres
    Litre,
    /// Centimetres
    Centimetre,
    /// Millimetres
    Millimetre,
}

impl MetricUnit {
    /// Recognize an authored unit, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(unit: &str) -> Option<Self> {
        match unit.trim().to_lowercase().as_str() {
            "g" | "gr" | "gram" | "grams" | "gramme" | "grammes" => Some(Self::Gram),
            "kg" | "kilogram" | "kilograms" | "kilogramme" | "kilogrammes" => Some(Self::Kilogram),
            "ml" | "millilitre" | "millilitres" | "milliliter" | "milliliters" => {
                Some(Self::Millilitre)
            }
            "cl" | "centilitre" | "centilitres" | "centiliter" | "centiliters" => {
                Some(Self::Centilitre)
            }
            "l" | "litre" | "litres" | "liter" | "liters" => Some(Self::Litre),
            "cm" | "centimetre" | "centimetres" | "centimeter" | "centimeters" => {
                Some(Self::Centimetre)
            }
            "mm" | "millimetre" | "millimetres" | "millimeter" | "millimeters" => {
                Some(Self::Millimetre)
            }
            _ => None,
        }
    }

    /// Short symbol used for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Millilitre => "ml",
            Self::Centilitre => "cl",
            Self::Litre => "L",
            Self::Centimetre => "cm",
            Self::Millimetre => "mm",
        }
    }
}

impl Display for MetricUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An amount paired with the unit it is expressed in
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    /// Numeric amount
    pub value: f64,
    /// Unit text, `None` for unitless counts
    pub unit: Option<String>,
}

impl Measure {
    /// Pair an amount with an optional unit
    #[must_use]
    pub fn new(value: f64, unit: Option<&str>) -> Self {
        Self {
            value,
            unit: unit.map(str::to_owned),
        }
    }
}

/// Convert a metric measure to its imperial display unit
///
/// Grams become ounces below one pound and pounds from one pound up;
/// millilitres become fluid ounces below one cup and cups from one cup up.
/// Kilograms become pounds, centilitres fluid ounces, litres quarts, and
/// lengths inches. Units without an imperial counterpart pass through.
#[must_use]
pub fn to_imperial(value: f64, unit: Option<&str>) -> Measure {
    let Some(metric) = unit.and_then(MetricUnit::parse) else {
        return Measure::new(value, unit);
    };

    let (factor, imperial) = match metric {
        MetricUnit::Gram if value >= GRAMS_PER_LB => (LB_PER_GRAM, "lb"),
        MetricUnit::Gram => (OZ_PER_GRAM, "oz"),
        MetricUnit::Kilogram => (LB_PER_KG, "lb"),
        MetricUnit::Millilitre if value >= ML_PER_CUP => (CUPS_PER_ML, "cup"),
        MetricUnit::Millilitre => (FL_OZ_PER_ML, "fl oz"),
        MetricUnit::Centilitre => (FL_OZ_PER_CL, "fl oz"),
        MetricUnit::Litre => (QUARTS_PER_L, "qt"),
        MetricUnit::Centimetre => (IN_PER_CM, "in"),
        MetricUnit::Millimetre => (IN_PER_MM, "in"),
    };

    Measure::new(value * factor, Some(imperial))
}

/// Celsius to Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius.mul_add(9.0 / 5.0, 32.0)
}
