//! Error handling for routerjig
//!
//! Two error kinds cover the joint-geometry engine:
//! - Configuration errors (invalid user-supplied dimensions or parameters)
//! - Geometry errors (a cut or cut sequence that cannot be routed)
//!
//! Both carry the offending values so the user-facing message is precise.
//! All error types use `thiserror`.

use crate::units::Intervals;
use thiserror::Error;

/// Configuration error type
///
/// Raised when a user-supplied dimension or parameter is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Input could not be parsed as a number or length
    #[error("{name} is \"{input}\": {reason}")]
    Unparseable {
        /// The name of the field being set.
        name: String,
        /// The raw input.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Value must be strictly positive
    #[error("{name} is {value}. Set to a positive value.")]
    NotPositive {
        /// The name of the field being set.
        name: String,
        /// The rejected value, as displayed to the user.
        value: String,
    },

    /// Value must be zero or positive
    #[error("{name} is {value}. Set to zero or a positive value.")]
    Negative {
        /// The name of the field being set.
        name: String,
        /// The rejected value, as displayed to the user.
        value: String,
    },

    /// Router-bit width must be divisible by two
    #[error("Router-bit width ({width} intervals) must be even!")]
    OddBitWidth {
        /// The rejected width.
        width: Intervals,
    },

    /// Slider-style parameter outside of its allowed range
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..={max})")]
    OutOfRange {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: i64,
        /// Smallest allowed value.
        min: i64,
        /// Largest allowed value.
        max: i64,
    },

    /// Generic invalid parameter
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Why the value is invalid.
        reason: String,
    },
}

impl ConfigurationError {
    /// Shorthand for [`ConfigurationError::NotPositive`].
    pub fn not_positive(name: impl Into<String>, value: impl ToString) -> Self {
        Self::NotPositive {
            name: name.into(),
            value: value.to_string(),
        }
    }

    /// Shorthand for [`ConfigurationError::Unparseable`].
    pub fn unparseable(
        name: impl Into<String>,
        input: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Unparseable {
            name: name.into(),
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Geometry error type
///
/// Raised when a cut, or a sequence of cuts, is not feasible for the
/// current bit and board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Cut has no extent
    #[error("cut left = {left}, right = {right}: Must have right > left!")]
    EmptyCut {
        /// Left bound of the cut.
        left: Intervals,
        /// Right bound of the cut.
        right: Intervals,
    },

    /// Cut starts before the board
    #[error("cut left = {left}, right = {right}: Must have left >= 0!")]
    LeftOutOfBounds {
        /// Left bound of the cut.
        left: Intervals,
        /// Right bound of the cut.
        right: Intervals,
    },

    /// Cut ends past the board
    #[error(
        "cut left = {left}, right = {right}: Must have right <= board width ({board_width})!"
    )]
    RightOutOfBounds {
        /// Left bound of the cut.
        left: Intervals,
        /// Right bound of the cut.
        right: Intervals,
        /// Width of the board.
        board_width: Intervals,
    },

    /// Interior cut narrower than the bit
    #[error(
        "cut left = {left}, right = {right}: Bit width too large for this cut! (bit width = {bit_width})"
    )]
    BitTooWide {
        /// Left bound of the cut.
        left: Intervals,
        /// Right bound of the cut.
        right: Intervals,
        /// Width of the bit.
        bit_width: Intervals,
    },

    /// Cuts overlap, touch, or are out of order
    #[error(
        "cut {index} (left = {left}) must start after cut {previous} ends (right = {previous_right})!"
    )]
    Overlap {
        /// Index of the offending cut.
        index: usize,
        /// Left bound of the offending cut.
        left: Intervals,
        /// Index of the preceding cut.
        previous: usize,
        /// Right bound of the preceding cut.
        previous_right: Intervals,
    },

    /// An edge must have at least one cut
    #[error("No cuts defined for this edge!")]
    NoCuts,
}

/// Main error type for routerjig
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Parameter set could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is a configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
