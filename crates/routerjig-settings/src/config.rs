//! Configuration management for routerjig
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML files; the default file lives in the platform configuration
//! directory.
//!
//! Configuration is organized into logical sections:
//! - Units (measurement system and imperial resolution)
//! - Router bit defaults
//! - Board defaults
//! - Spacing (minimum edge finger, Edit undo depth, starting strategy)
//! - Drawing margins
//!
//! Lengths are stored as strings in the configured units ("7 1/2", "3/4"
//! for imperial, "190" for metric) and parsed on conversion.

pub use routerjig_core::MeasurementSystem;

use crate::error::{SettingsError, SettingsResult};
use routerjig_core::{ConfigurationError, Intervals, Units};
use routerjig_joints::{
    Board, Margins, RouterBit, SpacingConfig, SpacingKind, DEFAULT_UNDO_DEPTH,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the default configuration
pub const CONFIG_FILE_NAME: &str = "config.toml";

const APP_DIR: &str = "routerjig";

/// Measurement system and resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitSettings {
    pub system: MeasurementSystem,
    /// Intervals per inch; ignored by the metric system
    pub increments_per_inch: Intervals,
}

impl Default for UnitSettings {
    fn default() -> Self {
        let units = Units::default();
        Self {
            system: units.system,
            increments_per_inch: units.increments_per_inch,
        }
    }
}

/// Router bit used for new designs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BitSettings {
    pub width: String,
    pub depth: String,
    /// Dovetail angle in degrees, 0 for a straight bit
    pub angle: f64,
}

impl BitSettings {
    fn for_system(system: MeasurementSystem) -> Self {
        let (width, depth) = match system {
            MeasurementSystem::Imperial => ("1/2", "3/4"),
            MeasurementSystem::Metric => ("12", "18"),
        };
        Self {
            width: width.to_string(),
            depth: depth.to_string(),
            angle: 0.0,
        }
    }
}

impl Default for BitSettings {
    fn default() -> Self {
        Self::for_system(MeasurementSystem::default())
    }
}

/// Board used for new designs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub width: String,
    pub height: String,
    pub thickness: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wood: Option<String>,
}

impl BoardSettings {
    fn for_system(system: MeasurementSystem) -> Self {
        let (width, other) = match system {
            MeasurementSystem::Imperial => ("7 1/2", "1"),
            MeasurementSystem::Metric => ("190", "25"),
        };
        Self {
            width: width.to_string(),
            height: other.to_string(),
            thickness: other.to_string(),
            wood: None,
        }
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self::for_system(MeasurementSystem::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingSettings {
    /// Narrowest partial finger kept at a board edge
    pub min_finger_width: String,
    /// Snapshots kept by the Edit strategy
    pub undo_depth: usize,
    /// Strategy selected when a design is created
    pub strategy: SpacingKind,
}

impl SpacingSettings {
    fn for_system(system: MeasurementSystem) -> Self {
        let min_finger_width = match system {
            MeasurementSystem::Imperial => "1/16",
            MeasurementSystem::Metric => "2",
        };
        Self {
            min_finger_width: min_finger_width.to_string(),
            undo_depth: DEFAULT_UNDO_DEPTH,
            strategy: SpacingKind::Equal,
        }
    }
}

impl Default for SpacingSettings {
    fn default() -> Self {
        Self::for_system(MeasurementSystem::default())
    }
}

/// Drawing margins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Space to the left of and below the template
    pub margin: String,
    /// Separation between template and boards
    pub separation: String,
}

impl DrawingSettings {
    fn for_system(system: MeasurementSystem) -> Self {
        let m = match system {
            MeasurementSystem::Imperial => "1/4",
            MeasurementSystem::Metric => "6",
        };
        Self {
            margin: m.to_string(),
            separation: m.to_string(),
        }
    }
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self::for_system(MeasurementSystem::default())
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Verbose logging
    pub debug: bool,
    pub units: UnitSettings,
    pub bit: BitSettings,
    pub board: BoardSettings,
    pub spacing: SpacingSettings,
    pub drawing: DrawingSettings,
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl Config {
    /// Create new config with imperial defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults expressed in `system`
    pub fn for_system(system: MeasurementSystem) -> Self {
        Self {
            debug: false,
            units: UnitSettings {
                system,
                ..UnitSettings::default()
            },
            bit: BitSettings::for_system(system),
            board: BoardSettings::for_system(system),
            spacing: SpacingSettings::for_system(system),
            drawing: DrawingSettings::for_system(system),
        }
    }

    /// Default config file location: `<config dir>/routerjig/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let mut path = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration or home directory".to_string())
            })?;
        path.push(APP_DIR);
        path.push(CONFIG_FILE_NAME);
        Ok(path)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        info!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// Load `path`, or the default file when `path` is `None`
    ///
    /// A missing default file yields the defaults; an explicitly named file
    /// must exist.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration
    ///
    /// Every length must parse in the configured units and be accepted by
    /// the object it configures.
    pub fn validate(&self) -> SettingsResult<()> {
        self.router_bit()?;
        self.board()?;
        self.margins()?;

        if self.spacing.undo_depth == 0 {
            return Err(SettingsError::invalid(
                "spacing.undo_depth",
                "must be at least 1",
            ));
        }
        let min = self.spacing_config()?.min_finger_width;
        if min <= 0 {
            return Err(ConfigurationError::not_positive("Minimum finger width", min).into());
        }
        Ok(())
    }

    pub fn to_units(&self) -> SettingsResult<Units> {
        match self.units.system {
            MeasurementSystem::Metric => Ok(Units::metric()),
            MeasurementSystem::Imperial => Units::imperial(self.units.increments_per_inch).map_err(
                |e| SettingsError::invalid("units.increments_per_inch", e.to_string()),
            ),
        }
    }

    fn length(&self, value: &str, name: &str) -> SettingsResult<Intervals> {
        Ok(self.to_units()?.string_to_intervals(value, name)?)
    }

    pub fn router_bit(&self) -> SettingsResult<RouterBit> {
        let width = self.length(&self.bit.width, "Bit width")?;
        let depth = self.length(&self.bit.depth, "Bit depth")?;
        Ok(RouterBit::new(width, depth, self.bit.angle)?)
    }

    pub fn board(&self) -> SettingsResult<Board> {
        let mut board = Board::new(
            self.length(&self.board.width, "Board width")?,
            self.length(&self.board.height, "Board height")?,
            self.length(&self.board.thickness, "Board thickness")?,
        )?;
        board.set_wood(self.board.wood.clone());
        Ok(board)
    }

    pub fn margins(&self) -> SettingsResult<Margins> {
        let margin = self.length(&self.drawing.margin, "Margin")?;
        let sep = self.length(&self.drawing.separation, "Separation")?;
        for (name, value) in [("Margin", margin), ("Separation", sep)] {
            if value < 0 {
                return Err(ConfigurationError::Negative {
                    name: name.to_string(),
                    value: value.to_string(),
                }
                .into());
            }
        }
        Ok(Margins {
            left: margin,
            bottom: margin,
            sep,
        })
    }

    pub fn spacing_config(&self) -> SettingsResult<SpacingConfig> {
        let units = self.to_units()?;
        Ok(SpacingConfig {
            units,
            min_finger_width: units
                .string_to_intervals(&self.spacing.min_finger_width, "Minimum finger width")?,
            undo_depth: self.spacing.undo_depth.max(1),
        })
    }
}
