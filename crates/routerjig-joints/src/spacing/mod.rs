//! Spacing strategies
//!
//! A spacing strategy owns copies of the bit and board and produces the
//! A-side cut sequence from its own parameters. Every sequence it accepts
//! has passed [`validate_joint`](crate::adjoining::validate_joint).
//!
//! - [`EqualSpacing`]: evenly sized and spaced cuts
//! - [`VariableSpacing`]: a finger count, widest at the center
//! - [`EditSpacing`]: a seed sequence mutated by discrete operations, see [`Editable`]

mod edit;
mod equal;
mod variable;

pub use edit::{EditSpacing, EditState};
pub use equal::EqualSpacing;
pub use variable::VariableSpacing;

use crate::cut::Cut;
use crate::params::SpacingParams;
use crate::undo::DEFAULT_UNDO_DEPTH;
use routerjig_core::{ConfigurationError, Intervals, Result, Units};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingKind {
    Equal,
    Variable,
    Edit,
}

impl fmt::Display for SpacingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpacingKind::Equal => write!(f, "Equal"),
            SpacingKind::Variable => write!(f, "Variable"),
            SpacingKind::Edit => write!(f, "Edit"),
        }
    }
}

impl FromStr for SpacingKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "equal" => Ok(Self::Equal),
            "variable" => Ok(Self::Variable),
            "edit" => Ok(Self::Edit),
            _ => Err(format!("Unknown spacing: {}", s)),
        }
    }
}

/// Integer slider parameter with an inclusive range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingParam {
    pub min: Intervals,
    pub max: Intervals,
    pub value: Intervals,
}

impl SpacingParam {
    /// Create a parameter, clamping `value` into `[min, max]`
    pub fn new(min: Intervals, max: Intervals, value: Intervals) -> Self {
        let max = max.max(min);
        Self {
            min,
            max,
            value: value.clamp(min, max),
        }
    }

    pub fn contains(&self, value: Intervals) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Check `value` against the range, naming the parameter on failure
    pub fn check(&self, name: &str, value: Intervals) -> std::result::Result<(), ConfigurationError> {
        if !self.contains(value) {
            return Err(ConfigurationError::OutOfRange {
                name: name.to_string(),
                value: i64::from(value),
                min: i64::from(self.min),
                max: i64::from(self.max),
            });
        }
        Ok(())
    }
}

/// Settings shared by all strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingConfig {
    pub units: Units,
    /// Narrowest partial finger kept at a board edge
    pub min_finger_width: Intervals,
    /// Snapshots kept by the Edit strategy
    pub undo_depth: usize,
}

impl SpacingConfig {
    /// Defaults for `units`: 1/16" minimum finger, 100 undo levels
    pub fn new(units: Units) -> Self {
        Self {
            units,
            min_finger_width: units.inches_to_intervals(1.0 / 16.0).max(1),
            undo_depth: DEFAULT_UNDO_DEPTH,
        }
    }
}

impl Default for SpacingConfig {
    fn default() -> Self {
        Self::new(Units::default())
    }
}

/// Common capability of every spacing strategy
pub trait SpacingStrategy {
    fn kind(&self) -> SpacingKind;

    /// Current cut sequence, ordered and validated
    fn cuts(&self) -> &[Cut];

    /// Human-readable parameter labels
    fn labels(&self) -> Vec<String>;

    /// Parameters that reproduce the current cuts
    fn params(&self) -> SpacingParams;

    /// Recompute the cuts from the current parameters
    ///
    /// On error the previous cuts are kept.
    fn set_cuts(&mut self) -> Result<()>;
}

/// Direct mutation of a cut sequence
///
/// Every operation returns a status message. Operations that cannot be
/// applied leave the state untouched and say why.
pub trait Editable: SpacingStrategy {
    fn cut_move_left(&mut self) -> String;
    fn cut_move_right(&mut self) -> String;
    fn cut_widen_left(&mut self) -> String;
    fn cut_widen_right(&mut self) -> String;
    fn cut_trim_left(&mut self) -> String;
    fn cut_trim_right(&mut self) -> String;
    /// Toggle the active flag of the cut under the cursor
    fn cut_toggle(&mut self) -> String;
    fn cut_all_active(&mut self) -> String;
    fn cut_all_not_active(&mut self) -> String;
    fn cut_add(&mut self) -> String;
    fn cut_delete_active(&mut self) -> String;
    /// Move the cursor by `delta` cuts, wrapping around
    fn cut_increment_cursor(&mut self, delta: i32) -> String;
    fn undo(&mut self) -> String;
    /// True when the cuts differ from the seed
    fn changes_made(&self) -> bool;
}

/// One of the three strategies
#[derive(Debug, Clone)]
pub enum Spacing {
    Equal(EqualSpacing),
    Variable(VariableSpacing),
    Edit(EditSpacing),
}

impl Spacing {
    fn strategy(&self) -> &dyn SpacingStrategy {
        match self {
            Spacing::Equal(s) => s,
            Spacing::Variable(s) => s,
            Spacing::Edit(s) => s,
        }
    }

    fn strategy_mut(&mut self) -> &mut dyn SpacingStrategy {
        match self {
            Spacing::Equal(s) => s,
            Spacing::Variable(s) => s,
            Spacing::Edit(s) => s,
        }
    }

    /// Edit operations, available only for the Edit strategy
    pub fn as_editable(&self) -> Option<&dyn Editable> {
        match self {
            Spacing::Edit(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_editable_mut(&mut self) -> Option<&mut dyn Editable> {
        match self {
            Spacing::Edit(s) => Some(s),
            _ => None,
        }
    }
}

impl SpacingStrategy for Spacing {
    fn kind(&self) -> SpacingKind {
        self.strategy().kind()
    }

    fn cuts(&self) -> &[Cut] {
        self.strategy().cuts()
    }

    fn labels(&self) -> Vec<String> {
        self.strategy().labels()
    }

    fn params(&self) -> SpacingParams {
        self.strategy().params()
    }

    fn set_cuts(&mut self) -> Result<()> {
        self.strategy_mut().set_cuts()
    }
}

impl From<EqualSpacing> for Spacing {
    fn from(s: EqualSpacing) -> Self {
        Spacing::Equal(s)
    }
}

impl From<VariableSpacing> for Spacing {
    fn from(s: VariableSpacing) -> Self {
        Spacing::Variable(s)
    }
}

impl From<EditSpacing> for Spacing {
    fn from(s: EditSpacing) -> Self {
        Spacing::Edit(s)
    }
}
