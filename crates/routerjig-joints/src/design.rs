//! Joint design document
//!
//! Owns the units, bit, board, template and drawing margins together with
//! the selected spacing strategy. Dimension changes rebuild the strategy
//! from scratch; they are refused while the Edit strategy is selected,
//! since the edited cuts are tied to the dimensions they were made for.

use crate::bit::RouterBit;
use crate::board::{Board, IncraTemplate, Margins};
use crate::geometry::JointGeometry;
use crate::params::JointParams;
use crate::spacing::{
    EditSpacing, Editable, EqualSpacing, Spacing, SpacingConfig, SpacingKind, SpacingStrategy,
    VariableSpacing,
};
use routerjig_core::{ConfigurationError, GeometryError, Intervals, Units};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum DesignError {
    /// Leaving the editor with unsaved edits, without asking to discard them
    #[error("Exiting the editor would discard the changes made in it")]
    UnsavedEdits,

    #[error("Bit, board and units cannot change while editing cuts")]
    EditLocked,

    #[error(transparent)]
    Joint(#[from] routerjig_core::Error),
}

impl From<ConfigurationError> for DesignError {
    fn from(e: ConfigurationError) -> Self {
        DesignError::Joint(e.into())
    }
}

impl From<GeometryError> for DesignError {
    fn from(e: GeometryError) -> Self {
        DesignError::Joint(e.into())
    }
}

pub type DesignResult<T> = std::result::Result<T, DesignError>;

#[derive(Debug, Clone)]
pub struct JointDesign {
    config: SpacingConfig,
    units: Units,
    bit: RouterBit,
    board: Board,
    template: IncraTemplate,
    margins: Margins,
    spacing: Spacing,
}

impl JointDesign {
    /// New design with default equal spacing
    pub fn new(
        config: &SpacingConfig,
        units: Units,
        bit: RouterBit,
        board: Board,
        margins: Margins,
    ) -> DesignResult<Self> {
        let config = SpacingConfig { units, ..*config };
        let spacing = EqualSpacing::new(&bit, &board, &config)?.into();
        Ok(Self {
            config,
            units,
            template: IncraTemplate::new(&board, &units),
            bit,
            board,
            margins,
            spacing,
        })
    }

    /// Rebuild a design from saved parameters
    pub fn from_params(
        params: &JointParams,
        config: &SpacingConfig,
        margins: Margins,
    ) -> DesignResult<Self> {
        let config = SpacingConfig {
            units: params.units,
            ..*config
        };
        let (bit, board, spacing) = params.restore(&config)?;
        info!(kind = %spacing.kind(), "design restored");
        Ok(Self {
            config,
            units: params.units,
            template: IncraTemplate::new(&board, &params.units),
            bit,
            board,
            margins,
            spacing,
        })
    }

    pub fn params(&self) -> JointParams {
        JointParams::capture(&self.units, &self.bit, &self.board, &self.spacing)
    }

    pub fn units(&self) -> &Units {
        &self.units
    }

    pub fn bit(&self) -> &RouterBit {
        &self.bit
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn template(&self) -> &IncraTemplate {
        &self.template
    }

    pub fn margins(&self) -> &Margins {
        &self.margins
    }

    pub fn config(&self) -> &SpacingConfig {
        &self.config
    }

    pub fn kind(&self) -> SpacingKind {
        self.spacing.kind()
    }

    pub fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    /// Selected strategy, for adjusting its own parameters
    pub fn spacing_mut(&mut self) -> &mut Spacing {
        &mut self.spacing
    }

    /// Edit operations, when the Edit strategy is selected
    pub fn editor(&mut self) -> Option<&mut dyn Editable> {
        self.spacing.as_editable_mut()
    }

    /// Switch the spacing strategy
    ///
    /// Entering Edit seeds it with the current cuts. Leaving Edit after
    /// changes is refused unless `discard_edits` is set.
    pub fn select_spacing(&mut self, kind: SpacingKind, discard_edits: bool) -> DesignResult<()> {
        if let Spacing::Edit(edit) = &self.spacing {
            if kind == SpacingKind::Edit {
                return Ok(());
            }
            if edit.changes_made() {
                if !discard_edits {
                    return Err(DesignError::UnsavedEdits);
                }
                warn!("discarding edited cuts");
            }
        }
        self.spacing = self.build_spacing(kind, &self.bit, &self.board)?;
        info!(%kind, "changed spacing algorithm");
        Ok(())
    }

    /// Recreate the selected strategy from its defaults
    ///
    /// The Edit strategy returns to the cuts it was seeded with and keeps
    /// that seed.
    pub fn reinit_spacing(&mut self) -> DesignResult<()> {
        if let Spacing::Edit(edit) = &mut self.spacing {
            edit.set_cuts()?;
            info!("edited cuts reset to seed");
            return Ok(());
        }
        self.spacing = self.build_spacing(self.kind(), &self.bit, &self.board)?;
        Ok(())
    }

    fn build_spacing(
        &self,
        kind: SpacingKind,
        bit: &RouterBit,
        board: &Board,
    ) -> DesignResult<Spacing> {
        let spacing = match kind {
            SpacingKind::Equal => EqualSpacing::new(bit, board, &self.config)?.into(),
            SpacingKind::Variable => VariableSpacing::new(bit, board, &self.config)?.into(),
            SpacingKind::Edit => {
                EditSpacing::new(bit, board, &self.config, self.spacing.cuts())?.into()
            }
        };
        Ok(spacing)
    }

    /// Apply a dimension change and rebuild the strategy, or change nothing
    fn update_dimensions(
        &mut self,
        apply: impl FnOnce(&mut RouterBit, &mut Board) -> Result<(), ConfigurationError>,
    ) -> DesignResult<()> {
        if self.kind() == SpacingKind::Edit {
            return Err(DesignError::EditLocked);
        }
        let mut bit = self.bit.clone();
        let mut board = self.board.clone();
        apply(&mut bit, &mut board)?;
        let spacing = self.build_spacing(self.kind(), &bit, &board)?;
        self.template = IncraTemplate::new(&board, &self.units);
        self.bit = bit;
        self.board = board;
        self.spacing = spacing;
        Ok(())
    }

    pub fn set_bit_width(&mut self, width: Intervals) -> DesignResult<()> {
        self.update_dimensions(|bit, _| bit.set_width(width))
    }

    pub fn set_bit_depth(&mut self, depth: Intervals) -> DesignResult<()> {
        self.update_dimensions(|bit, _| bit.set_depth(depth))
    }

    pub fn set_bit_angle(&mut self, angle: f64) -> DesignResult<()> {
        self.update_dimensions(|bit, _| bit.set_angle(angle))
    }

    pub fn set_board_width(&mut self, width: Intervals) -> DesignResult<()> {
        self.update_dimensions(|_, board| board.set_width(width))
    }

    pub fn set_board_height(&mut self, height: Intervals) -> DesignResult<()> {
        self.update_dimensions(|_, board| board.set_height(height))
    }

    pub fn set_bit_width_from_str(&mut self, s: &str) -> DesignResult<()> {
        let units = self.units;
        self.update_dimensions(|bit, _| bit.set_width_from_str(s, &units))
    }

    pub fn set_bit_depth_from_str(&mut self, s: &str) -> DesignResult<()> {
        let units = self.units;
        self.update_dimensions(|bit, _| bit.set_depth_from_str(s, &units))
    }

    pub fn set_bit_angle_from_str(&mut self, s: &str) -> DesignResult<()> {
        self.update_dimensions(|bit, _| bit.set_angle_from_str(s))
    }

    pub fn set_board_width_from_str(&mut self, s: &str) -> DesignResult<()> {
        let units = self.units;
        self.update_dimensions(|_, board| board.set_width_from_str(s, &units))
    }

    pub fn set_board_height_from_str(&mut self, s: &str) -> DesignResult<()> {
        let units = self.units;
        self.update_dimensions(|_, board| board.set_height_from_str(s, &units))
    }

    /// Re-express every dimension in `units`
    ///
    /// The bit width is rounded to the nearest even interval.
    pub fn change_units(&mut self, units: Units) -> DesignResult<()> {
        if self.kind() == SpacingKind::Edit {
            return Err(DesignError::EditLocked);
        }
        let from = self.units;
        let convert = |value: Intervals| from.convert(value, &units).max(1);
        let half_inches = from.intervals_to_inches(self.bit.width()) / 2.0;
        let width = 2 * units.inches_to_intervals(half_inches);

        let bit = RouterBit::new(width.max(2), convert(self.bit.depth()), self.bit.angle())?;
        let mut board = Board::new(
            convert(self.board.width()),
            convert(self.board.height()),
            convert(self.board.thickness()),
        )?;
        board.set_wood(self.board.wood().map(str::to_string));
        board.set_active(self.board.is_active());

        let previous = (self.units, self.config);
        self.units = units;
        self.config = SpacingConfig {
            units,
            min_finger_width: convert(self.config.min_finger_width),
            ..self.config
        };
        let spacing = match self.build_spacing(self.kind(), &bit, &board) {
            Ok(spacing) => spacing,
            Err(e) => {
                (self.units, self.config) = previous;
                return Err(e);
            }
        };
        self.margins = Margins {
            left: convert(self.margins.left),
            bottom: convert(self.margins.bottom),
            sep: convert(self.margins.sep),
        };
        self.template = IncraTemplate::new(&board, &units);
        self.bit = bit;
        self.board = board;
        self.spacing = spacing;
        info!(system = %units.system, "changed units");
        Ok(())
    }

    /// Fresh geometry for the current state
    pub fn geometry(&self) -> Result<JointGeometry, GeometryError> {
        JointGeometry::new(self.template, &self.board, &self.bit, &self.spacing, self.margins)
    }
}
