//! Variable-width cuts, widest at the board center

use super::{SpacingConfig, SpacingKind, SpacingParam, SpacingStrategy};
use crate::adjoining::validate_joint;
use crate::bit::RouterBit;
use crate::board::Board;
use crate::cut::Cut;
use crate::params::SpacingParams;
use routerjig_core::{Intervals, Result};
use tracing::debug;

/// A given number of cuts whose widths, like the gaps between them, grow
/// linearly towards the center of the board
///
/// The edge is split into `2n + 1` alternating gap and cut elements. Element
/// `k` is `base + delta * (n - |k - n|)` wide, so both ends are gaps and the
/// layout is symmetric by construction.
#[derive(Debug, Clone)]
pub struct VariableSpacing {
    bit: RouterBit,
    board: Board,
    config: SpacingConfig,
    fingers: SpacingParam,
    cuts: Vec<Cut>,
}

impl VariableSpacing {
    pub fn new(bit: &RouterBit, board: &Board, config: &SpacingConfig) -> Result<Self> {
        let range = Self::range(bit, board);
        let mut variable = Self {
            bit: bit.clone(),
            board: board.clone(),
            config: *config,
            fingers: SpacingParam {
                value: (range.min + range.max + 1) / 2,
                ..range
            },
            cuts: Vec::new(),
        };
        variable.set_cuts()?;
        Ok(variable)
    }

    pub fn with_fingers(
        bit: &RouterBit,
        board: &Board,
        config: &SpacingConfig,
        fingers: Intervals,
    ) -> Result<Self> {
        let range = Self::range(bit, board);
        range.check("Fingers", fingers)?;
        let mut variable = Self {
            bit: bit.clone(),
            board: board.clone(),
            config: *config,
            fingers: SpacingParam {
                value: fingers,
                ..range
            },
            cuts: Vec::new(),
        };
        variable.set_cuts()?;
        Ok(variable)
    }

    fn range(bit: &RouterBit, board: &Board) -> SpacingParam {
        let max = (board.width() / bit.width() - 1) / 2;
        SpacingParam::new(1, max.max(1), 1)
    }

    pub fn fingers(&self) -> &SpacingParam {
        &self.fingers
    }

    pub fn set_fingers(&mut self, fingers: Intervals) -> Result<()> {
        self.fingers.check("Fingers", fingers)?;
        let previous = self.fingers.value;
        self.fingers.value = fingers;
        if let Err(e) = self.set_cuts() {
            self.fingers.value = previous;
            return Err(e);
        }
        Ok(())
    }

    fn compute_cuts(&self) -> Vec<Cut> {
        let n = self.fingers.value;
        let elements = 2 * n + 1;
        let board_width = self.board.width();
        let delta = ((board_width - elements * self.bit.width()) / (n * n)).max(0);
        let base = (board_width - delta * n * n) / elements;
        let remainder = board_width - elements * base - delta * n * n;

        let mut cuts = Vec::with_capacity(n as usize);
        let mut x = 0;
        for k in 0..elements {
            let mut size = base + delta * (n - (k - n).abs());
            if k == 0 || k == elements - 1 {
                size += remainder / 2;
            }
            if k == n {
                size += remainder % 2;
            }
            if k % 2 == 1 {
                cuts.push(Cut::new(x, x + size));
            }
            x += size;
        }
        cuts
    }
}

impl SpacingStrategy for VariableSpacing {
    fn kind(&self) -> SpacingKind {
        SpacingKind::Variable
    }

    fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    fn labels(&self) -> Vec<String> {
        vec![format!("Fingers: {}", self.fingers.value)]
    }

    fn params(&self) -> SpacingParams {
        SpacingParams::Variable {
            fingers: self.fingers.value,
        }
    }

    fn set_cuts(&mut self) -> Result<()> {
        let cuts = self.compute_cuts();
        validate_joint(&cuts, &self.bit, &self.board)?;
        debug!(
            fingers = self.fingers.value,
            min_finger_width = self.config.min_finger_width,
            "variable spacing cuts set"
        );
        self.cuts = cuts;
        Ok(())
    }
}
