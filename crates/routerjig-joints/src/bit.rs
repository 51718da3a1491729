//! Router bit geometry
//!
//! Stores the properties of straight and dovetail router bits:
//!
//! - `width`: maximum cutting width, the bottom of a dovetail bit. Must be
//!   an even number of intervals so that `halfwidth` is exact.
//! - `depth`: cutting depth. Equals board thickness for through dovetails
//!   and box joints.
//! - `angle`: measured from the y-axis in degrees, following the dovetail bit
//!   standard. Zero for a straight bit.
//!
//! Derived attributes are recomputed together on every successful setter:
//!
//! - `offset`: x-distance between the max-width point and the point at the
//!   board's surface, rounded to the nearest interval. Exactly 0 for angle 0.
//! - `neck`: width of the bit at the board surface.

use routerjig_core::{round_half_away, ConfigurationError, Intervals, Units};
use tracing::debug;

/// Dovetail angles at or above this are not a bit geometry
const MAX_ANGLE: f64 = 90.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RouterBit {
    width: Intervals,
    depth: Intervals,
    angle: f64,
    halfwidth: Intervals,
    offset: Intervals,
    neck: Intervals,
}

impl RouterBit {
    /// Create a bit, validating every dimension
    pub fn new(width: Intervals, depth: Intervals, angle: f64) -> Result<Self, ConfigurationError> {
        Self::check_width(width)?;
        Self::check_depth(depth)?;
        Self::check_angle(angle)?;
        Self::derive(width, depth, angle)
    }

    /// Compute the dependent attributes from already-validated inputs
    ///
    /// Fails when the offset does not fit the interval range.
    fn derive(width: Intervals, depth: Intervals, angle: f64) -> Result<Self, ConfigurationError> {
        // exactly 0 for a straight bit, never a near-zero float
        let offset = if angle > 0.0 {
            round_half_away(f64::from(depth) * angle.to_radians().tan())
        } else {
            0
        };
        let neck = offset
            .checked_mul(2)
            .and_then(|twice| width.checked_sub(twice))
            .ok_or_else(|| ConfigurationError::InvalidParameter {
                name: "Bit angle".to_string(),
                reason: format!("{} degrees at depth {} is too steep", angle, depth),
            })?;
        Ok(Self {
            width,
            depth,
            angle,
            halfwidth: width / 2,
            offset,
            neck,
        })
    }

    fn check_width(width: Intervals) -> Result<(), ConfigurationError> {
        if width <= 0 {
            return Err(ConfigurationError::not_positive("Bit width", width));
        }
        if width % 2 != 0 {
            return Err(ConfigurationError::OddBitWidth { width });
        }
        Ok(())
    }

    fn check_depth(depth: Intervals) -> Result<(), ConfigurationError> {
        if depth <= 0 {
            return Err(ConfigurationError::not_positive("Bit depth", depth));
        }
        Ok(())
    }

    fn check_angle(angle: f64) -> Result<(), ConfigurationError> {
        if !angle.is_finite() {
            return Err(ConfigurationError::unparseable(
                "Bit angle",
                angle.to_string(),
                "angle must be a finite number",
            ));
        }
        if angle < 0.0 {
            return Err(ConfigurationError::Negative {
                name: "Bit angle".to_string(),
                value: angle.to_string(),
            });
        }
        if angle >= MAX_ANGLE {
            return Err(ConfigurationError::InvalidParameter {
                name: "Bit angle".to_string(),
                reason: format!("{} degrees; angle must be below 90 degrees", angle),
            });
        }
        Ok(())
    }

    pub fn width(&self) -> Intervals {
        self.width
    }

    pub fn depth(&self) -> Intervals {
        self.depth
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn halfwidth(&self) -> Intervals {
        self.halfwidth
    }

    pub fn offset(&self) -> Intervals {
        self.offset
    }

    pub fn neck(&self) -> Intervals {
        self.neck
    }

    /// True for a dovetail (angled) bit
    pub fn is_dovetail(&self) -> bool {
        self.angle > 0.0
    }

    pub fn set_width(&mut self, width: Intervals) -> Result<(), ConfigurationError> {
        Self::check_width(width)?;
        *self = Self::derive(width, self.depth, self.angle)?;
        debug!(width, neck = self.neck, "router bit width set");
        Ok(())
    }

    pub fn set_depth(&mut self, depth: Intervals) -> Result<(), ConfigurationError> {
        Self::check_depth(depth)?;
        *self = Self::derive(self.width, depth, self.angle)?;
        debug!(depth, offset = self.offset, "router bit depth set");
        Ok(())
    }

    pub fn set_angle(&mut self, angle: f64) -> Result<(), ConfigurationError> {
        Self::check_angle(angle)?;
        *self = Self::derive(self.width, self.depth, angle)?;
        debug!(angle, offset = self.offset, "router bit angle set");
        Ok(())
    }

    /// Set the width from a measurement string such as "1/2"
    pub fn set_width_from_str(&mut self, s: &str, units: &Units) -> Result<(), ConfigurationError> {
        let width = units.string_to_intervals(s, "Bit width")?;
        if width <= 0 {
            return Err(ConfigurationError::not_positive("Bit width", s));
        }
        self.set_width(width)
    }

    /// Set the depth from a measurement string such as "3/4"
    pub fn set_depth_from_str(&mut self, s: &str, units: &Units) -> Result<(), ConfigurationError> {
        let depth = units.string_to_intervals(s, "Bit depth")?;
        if depth <= 0 {
            return Err(ConfigurationError::not_positive("Bit depth", s));
        }
        self.set_depth(depth)
    }

    /// Set the angle, in degrees, from a string
    pub fn set_angle_from_str(&mut self, s: &str) -> Result<(), ConfigurationError> {
        let angle = s
            .trim()
            .parse::<f64>()
            .map_err(|e| ConfigurationError::unparseable("Bit angle", s, e.to_string()))?;
        self.set_angle(angle)
    }
}
