//! routerjig Settings Crate
//!
//! Loads, validates and saves the application configuration, and converts
//! it into the router bit, board, margins and spacing configuration used by
//! the joint engine.

pub mod config;
pub mod error;

pub use config::{
    BitSettings, BoardSettings, Config, DrawingSettings, SpacingSettings, UnitSettings,
    MeasurementSystem, CONFIG_FILE_NAME,
};
pub use error::{SettingsError, SettingsResult};
