//! # routerjig
//!
//! Design router-cut box joints and dovetails:
//! - Equal, Variable and hand-edited finger spacing
//! - Mating-board cuts derived from the first board
//! - Router passes for every cut
//! - Board and template outlines for drawing or printing
//!
//! ## Architecture
//!
//! routerjig is organized as a workspace with multiple crates:
//!
//! 1. **routerjig-core** - Interval units and error types
//! 2. **routerjig-joints** - Bits, boards, cuts, spacing strategies, joint geometry
//! 3. **routerjig-settings** - Configuration files
//! 4. **routerjig** - Main binary that integrates all crates

use serde::Serialize;
use std::fmt::Write as _;

pub use routerjig_core::{
    ConfigurationError, Error, GeometryError, Intervals, MeasurementSystem, Result, Units,
};

pub use routerjig_joints::{
    adjoining_cuts, board_coords, validate_joint, Board, Cut, DesignError, EditSpacing, Editable,
    EqualSpacing, IncraTemplate, JointDesign, JointEdge, JointGeometry, JointParams, Margins,
    Point, RouterBit, Spacing, SpacingConfig, SpacingKind, SpacingParams, SpacingStrategy,
    VariableSpacing,
};

pub use routerjig_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Logs go to stderr so that stdout carries only the joint report.
/// `RUST_LOG` directives are honored; the base level is DEBUG when `debug`
/// is set and INFO otherwise.
pub fn init_logging(debug: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(debug);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Machine-readable description of a computed joint
#[derive(Debug, Clone, Serialize)]
pub struct JointReport {
    pub params: JointParams,
    pub labels: Vec<String>,
    pub geometry: JointGeometry,
}

impl JointReport {
    pub fn new(design: &JointDesign) -> std::result::Result<Self, GeometryError> {
        Ok(Self {
            params: design.params(),
            labels: design.spacing().labels(),
            geometry: design.geometry()?,
        })
    }

    /// Human-readable cut table for both boards
    pub fn to_text(&self, units: &Units) -> String {
        let mut out = String::new();
        let bit = &self.params.bit;
        let board = &self.params.board;
        let _ = writeln!(
            out,
            "Bit: width {}, depth {}, angle {}",
            units.format_with_label(bit.width),
            units.format_with_label(bit.depth),
            bit.angle
        );
        let _ = writeln!(out, "Board width: {}", units.format_with_label(board.width));
        let _ = writeln!(
            out,
            "{} spacing: {}",
            self.params.spacing.kind(),
            self.labels.join(", ")
        );

        for (name, cuts) in [
            ("A", self.geometry.a_cuts()),
            ("B", self.geometry.b_cuts()),
        ] {
            let _ = writeln!(out, "\nBoard {} cuts:", name);
            for (i, cut) in cuts.iter().enumerate() {
                let passes: Vec<String> = cut
                    .passes()
                    .iter()
                    .map(|&p| units.intervals_to_string(p))
                    .collect();
                let _ = writeln!(
                    out,
                    "  {:>2}: {} to {}  passes: {}",
                    i,
                    units.intervals_to_string(cut.left),
                    units.intervals_to_string(cut.right),
                    passes.join(" ")
                );
            }
        }
        out
    }
}
