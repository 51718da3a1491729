//! Unit conversion utilities
//!
//! All joint geometry is integer arithmetic in "intervals", the smallest
//! addressable length. The [`Units`] value fixes what one interval is:
//! `1/increments_per_inch` inch for the imperial system, one millimeter for
//! the metric system. Supports decimal and fractional inch parsing and
//! formatting.

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer length in interval units
pub type Intervals = i32;

const MM_PER_INCH: f64 = 25.4;

/// Round to the nearest interval, halves away from zero
pub fn round_half_away(value: f64) -> Intervals {
    value.round() as Intervals
}

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Imperial system (inches)
    #[default]
    Imperial,
    /// Metric system (mm)
    Metric,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "english" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Converts between measurement strings and integer intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Units {
    /// Measurement system
    pub system: MeasurementSystem,
    /// Intervals per inch, used by the imperial system
    pub increments_per_inch: Intervals,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            system: MeasurementSystem::Imperial,
            increments_per_inch: 32,
        }
    }
}

impl Units {
    /// Imperial units with the given resolution
    pub fn imperial(increments_per_inch: Intervals) -> Result<Self, ConfigurationError> {
        if increments_per_inch <= 0 {
            return Err(ConfigurationError::not_positive(
                "Increments per inch",
                increments_per_inch,
            ));
        }
        Ok(Self {
            system: MeasurementSystem::Imperial,
            increments_per_inch,
        })
    }

    /// Metric units; one interval is one millimeter
    pub fn metric() -> Self {
        Self {
            system: MeasurementSystem::Metric,
            increments_per_inch: 32,
        }
    }

    /// Check units that did not come through a constructor, such as
    /// deserialized ones
    pub fn validated(self) -> Result<Self, ConfigurationError> {
        match self.system {
            MeasurementSystem::Imperial => Self::imperial(self.increments_per_inch),
            MeasurementSystem::Metric => Ok(self),
        }
    }

    pub fn is_metric(&self) -> bool {
        self.system == MeasurementSystem::Metric
    }

    /// Intervals in one inch, possibly fractional for metric
    fn intervals_per_inch(&self) -> f64 {
        match self.system {
            MeasurementSystem::Imperial => f64::from(self.increments_per_inch),
            MeasurementSystem::Metric => MM_PER_INCH,
        }
    }

    /// Convert a length in inches to intervals
    pub fn inches_to_intervals(&self, inches: f64) -> Intervals {
        round_half_away(inches * self.intervals_per_inch())
    }

    /// Convert intervals to inches
    pub fn intervals_to_inches(&self, value: Intervals) -> f64 {
        f64::from(value) / self.intervals_per_inch()
    }

    /// Re-express a length given in these units in `to` units
    pub fn convert(&self, value: Intervals, to: &Units) -> Intervals {
        to.inches_to_intervals(self.intervals_to_inches(value))
    }

    /// Parse a length string into intervals
    ///
    /// * `input` - String to parse ("1 1/2", "3/8", "0.75" for imperial; "12.5" for metric)
    /// * `name` - Field name used in the error message
    pub fn string_to_intervals(
        &self,
        input: &str,
        name: &str,
    ) -> Result<Intervals, ConfigurationError> {
        let trimmed = input.trim();
        let value = match self.system {
            MeasurementSystem::Metric => {
                let number = trimmed.strip_suffix("mm").unwrap_or(trimmed).trim();
                parse_decimal(number)
            }
            MeasurementSystem::Imperial => {
                let number = trimmed
                    .strip_suffix('"')
                    .or_else(|| trimmed.strip_suffix("in"))
                    .unwrap_or(trimmed)
                    .trim();
                parse_inches(number).map(|inches| inches * self.intervals_per_inch())
            }
        }
        .map_err(|reason| ConfigurationError::unparseable(name, input, reason))?;
        Ok(round_half_away(value))
    }

    /// Format intervals for display
    pub fn intervals_to_string(&self, value: Intervals) -> String {
        match self.system {
            MeasurementSystem::Metric => format!("{}", value),
            MeasurementSystem::Imperial => {
                let sign = if value < 0 { "-" } else { "" };
                let ipi = self.increments_per_inch;
                let n = value.abs();
                let whole = n / ipi;
                let rem = n % ipi;
                if rem == 0 {
                    return format!("{}{}", sign, whole);
                }
                let g = gcd(rem, ipi);
                let fraction = format!("{}/{}", rem / g, ipi / g);
                if whole == 0 {
                    format!("{}{}", sign, fraction)
                } else {
                    format!("{}{} {}", sign, whole, fraction)
                }
            }
        }
    }

    /// Unit suffix for display (`"` or "mm")
    pub fn unit_label(&self) -> &'static str {
        match self.system {
            MeasurementSystem::Metric => "mm",
            MeasurementSystem::Imperial => "\"",
        }
    }

    /// Format intervals with the unit suffix
    pub fn format_with_label(&self, value: Intervals) -> String {
        match self.system {
            MeasurementSystem::Metric => format!("{} mm", self.intervals_to_string(value)),
            MeasurementSystem::Imperial => {
                format!("{}{}", self.intervals_to_string(value), self.unit_label())
            }
        }
    }
}

fn gcd(mut a: Intervals, mut b: Intervals) -> Intervals {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a.abs()
}

fn parse_decimal(input: &str) -> Result<f64, String> {
    if input.is_empty() {
        return Err("empty value".to_string());
    }
    let value = input.parse::<f64>().map_err(|e| e.to_string())?;
    if !value.is_finite() {
        return Err("value is not finite".to_string());
    }
    Ok(value)
}

/// Parse decimal or mixed-fraction inches
fn parse_inches(input: &str) -> Result<f64, String> {
    if !input.contains('/') {
        return parse_decimal(input);
    }

    let mut total = 0.0;
    let mut negative = false;
    for (i, part) in input.split_whitespace().enumerate() {
        let part = if i == 0 {
            if let Some(rest) = part.strip_prefix('-') {
                negative = true;
                rest
            } else {
                part
            }
        } else {
            part
        };
        if part.contains('/') {
            let frac: Vec<&str> = part.split('/').collect();
            if frac.len() != 2 {
                return Err("Invalid fraction format".to_string());
            }
            let num = frac[0]
                .parse::<f64>()
                .map_err(|_| "Invalid numerator".to_string())?;
            let den = frac[1]
                .parse::<f64>()
                .map_err(|_| "Invalid denominator".to_string())?;
            if den == 0.0 {
                return Err("Division by zero".to_string());
            }
            total += num / den;
        } else {
            total += part
                .parse::<f64>()
                .map_err(|_| "Invalid number part".to_string())?;
        }
    }
    Ok(if negative { -total } else { total })
}
