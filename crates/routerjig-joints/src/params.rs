//! Reproducing parameters of a joint
//!
//! Everything needed to rebuild a design on reload: units, bit, board, and
//! the active strategy's own parameters. Derived cuts are not stored, except
//! for Edit, whose parameters are the cuts.

use crate::bit::RouterBit;
use crate::board::Board;
use crate::cut::Cut;
use crate::spacing::{
    EditSpacing, EqualSpacing, Spacing, SpacingConfig, SpacingKind, SpacingStrategy,
    VariableSpacing,
};
use routerjig_core::{ConfigurationError, Intervals, Result, Units};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BitParams {
    pub width: Intervals,
    pub depth: Intervals,
    pub angle: f64,
}

impl BitParams {
    pub fn to_bit(&self) -> std::result::Result<RouterBit, ConfigurationError> {
        RouterBit::new(self.width, self.depth, self.angle)
    }
}

impl From<&RouterBit> for BitParams {
    fn from(bit: &RouterBit) -> Self {
        Self {
            width: bit.width(),
            depth: bit.depth(),
            angle: bit.angle(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardParams {
    pub width: Intervals,
    pub height: Intervals,
    pub thickness: Intervals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wood: Option<String>,
}

impl BoardParams {
    pub fn to_board(&self) -> std::result::Result<Board, ConfigurationError> {
        let mut board = Board::new(self.width, self.height, self.thickness)?;
        board.set_wood(self.wood.clone());
        Ok(board)
    }
}

impl From<&Board> for BoardParams {
    fn from(board: &Board) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            thickness: board.thickness(),
            wood: board.wood().map(str::to_string),
        }
    }
}

/// Parameters of the active spacing strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpacingParams {
    Equal {
        spacing: Intervals,
        width: Intervals,
        centered: bool,
    },
    Variable {
        fingers: Intervals,
    },
    Edit {
        cuts: Vec<(Intervals, Intervals)>,
    },
}

impl SpacingParams {
    pub fn kind(&self) -> SpacingKind {
        match self {
            SpacingParams::Equal { .. } => SpacingKind::Equal,
            SpacingParams::Variable { .. } => SpacingKind::Variable,
            SpacingParams::Edit { .. } => SpacingKind::Edit,
        }
    }

    /// Rebuild the strategy these parameters describe
    pub fn build(&self, bit: &RouterBit, board: &Board, config: &SpacingConfig) -> Result<Spacing> {
        let spacing = match self {
            SpacingParams::Equal {
                spacing,
                width,
                centered,
            } => EqualSpacing::with_values(bit, board, config, *spacing, *width, *centered)?.into(),
            SpacingParams::Variable { fingers } => {
                VariableSpacing::with_fingers(bit, board, config, *fingers)?.into()
            }
            SpacingParams::Edit { cuts } => {
                let cuts: Vec<Cut> = cuts.iter().map(|&(l, r)| Cut::new(l, r)).collect();
                EditSpacing::new(bit, board, config, &cuts)?.into()
            }
        };
        Ok(spacing)
    }
}

/// Complete parameter set of a joint design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointParams {
    pub units: Units,
    pub bit: BitParams,
    pub board: BoardParams,
    pub spacing: SpacingParams,
}

impl JointParams {
    /// Capture the parameters of an existing design
    pub fn capture<S: SpacingStrategy + ?Sized>(
        units: &Units,
        bit: &RouterBit,
        board: &Board,
        spacing: &S,
    ) -> Self {
        Self {
            units: *units,
            bit: bit.into(),
            board: board.into(),
            spacing: spacing.params(),
        }
    }

    /// Rebuild bit, board and strategy
    pub fn restore(&self, config: &SpacingConfig) -> Result<(RouterBit, Board, Spacing)> {
        self.units.validated()?;
        let bit = self.bit.to_bit()?;
        let board = self.board.to_board()?;
        let spacing = self.spacing.build(&bit, &board, config)?;
        Ok((bit, board, spacing))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
