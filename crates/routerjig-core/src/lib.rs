//! # routerjig Core
//!
//! Core types and utilities shared by the routerjig crates:
//! the integer interval unit, the [`Units`] collaborator that converts
//! measurement strings to intervals and back, and the error types used
//! throughout the joint-geometry engine.

pub mod error;
pub mod units;

pub use error::{ConfigurationError, Error, GeometryError, Result};
pub use units::{round_half_away, Intervals, MeasurementSystem, Units};
