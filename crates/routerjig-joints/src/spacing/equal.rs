//! Equally spaced cuts

use super::{SpacingConfig, SpacingKind, SpacingParam, SpacingStrategy};
use crate::adjoining::validate_joint;
use crate::bit::RouterBit;
use crate::board::Board;
use crate::cut::Cut;
use crate::params::SpacingParams;
use routerjig_core::{Intervals, Result};
use tracing::debug;

/// Cuts of one width separated by one gap
///
/// Both sliders are in intervals. Partial cuts at the board edges are kept
/// only when wider than `max(min_finger_width, bit.offset)`.
#[derive(Debug, Clone)]
pub struct EqualSpacing {
    bit: RouterBit,
    board: Board,
    config: SpacingConfig,
    /// Gap between adjacent cuts
    spacing: SpacingParam,
    /// Width of each cut
    width: SpacingParam,
    centered: bool,
    cuts: Vec<Cut>,
}

impl EqualSpacing {
    /// Default parameters: bit-wide cuts and gaps, centered
    pub fn new(bit: &RouterBit, board: &Board, config: &SpacingConfig) -> Result<Self> {
        let (spacing, width) = Self::ranges(bit, board);
        let mut equal = Self {
            bit: bit.clone(),
            board: board.clone(),
            config: *config,
            spacing,
            width,
            centered: true,
            cuts: Vec::new(),
        };
        equal.set_cuts()?;
        Ok(equal)
    }

    /// Explicit slider values, each checked against its range
    pub fn with_values(
        bit: &RouterBit,
        board: &Board,
        config: &SpacingConfig,
        spacing: Intervals,
        width: Intervals,
        centered: bool,
    ) -> Result<Self> {
        let (spacing_range, width_range) = Self::ranges(bit, board);
        spacing_range.check("Spacing", spacing)?;
        width_range.check("Width", width)?;
        let mut equal = Self {
            bit: bit.clone(),
            board: board.clone(),
            config: *config,
            spacing: SpacingParam { value: spacing, ..spacing_range },
            width: SpacingParam { value: width, ..width_range },
            centered,
            cuts: Vec::new(),
        };
        equal.set_cuts()?;
        Ok(equal)
    }

    fn ranges(bit: &RouterBit, board: &Board) -> (SpacingParam, SpacingParam) {
        let half = board.width() / 2;
        let spacing_min = bit.neck().max(1);
        let spacing = SpacingParam::new(spacing_min, half, bit.width());
        let width = SpacingParam::new(bit.width(), half, bit.width());
        (spacing, width)
    }

    pub fn spacing(&self) -> &SpacingParam {
        &self.spacing
    }

    pub fn width(&self) -> &SpacingParam {
        &self.width
    }

    pub fn is_centered(&self) -> bool {
        self.centered
    }

    pub fn set_spacing(&mut self, spacing: Intervals) -> Result<()> {
        self.spacing.check("Spacing", spacing)?;
        self.update(|s| s.spacing.value = spacing)
    }

    pub fn set_width(&mut self, width: Intervals) -> Result<()> {
        self.width.check("Width", width)?;
        self.update(|s| s.width.value = width)
    }

    pub fn set_centered(&mut self, centered: bool) -> Result<()> {
        self.update(|s| s.centered = centered)
    }

    /// Apply a parameter change, restoring the old values if the cuts fail
    fn update(&mut self, apply: impl FnOnce(&mut Self)) -> Result<()> {
        let previous = (self.spacing, self.width, self.centered);
        apply(self);
        if let Err(e) = self.set_cuts() {
            (self.spacing, self.width, self.centered) = previous;
            return Err(e);
        }
        Ok(())
    }

    fn compute_cuts(&self) -> Vec<Cut> {
        let board_width = self.board.width();
        let width = self.width.value;
        let spacing = self.spacing.value;
        let min_finger = self.config.min_finger_width.max(self.bit.offset());
        let mut cuts = Vec::new();

        if self.centered {
            let left = (board_width / 2 - width / 2).max(0);
            let right = (left + width).min(board_width);
            cuts.push(Cut::new(left, right));

            let mut i = left - spacing;
            while i > 0 {
                let li = (i - width).max(0);
                if i - li > min_finger {
                    cuts.push(Cut::new(li, i));
                }
                i = li - spacing;
            }

            let mut i = right + spacing;
            while i < board_width {
                let ri = (i + width).min(board_width);
                if ri - i > min_finger {
                    cuts.push(Cut::new(i, ri));
                }
                i = ri + spacing;
            }
            cuts.sort_by_key(|c| c.left);
        } else {
            let mut i = 0;
            while i < board_width {
                let ri = (i + width).min(board_width);
                if i == 0 || ri - i > min_finger {
                    cuts.push(Cut::new(i, ri));
                }
                i = ri + spacing;
            }
        }
        cuts
    }
}

impl SpacingStrategy for EqualSpacing {
    fn kind(&self) -> SpacingKind {
        SpacingKind::Equal
    }

    fn cuts(&self) -> &[Cut] {
        &self.cuts
    }

    fn labels(&self) -> Vec<String> {
        let units = &self.config.units;
        vec![
            format!("Spacing: {}", units.format_with_label(self.spacing.value)),
            format!("Width: {}", units.format_with_label(self.width.value)),
            if self.centered { "Centered" } else { "Not centered" }.to_string(),
        ]
    }

    fn params(&self) -> SpacingParams {
        SpacingParams::Equal {
            spacing: self.spacing.value,
            width: self.width.value,
            centered: self.centered,
        }
    }

    fn set_cuts(&mut self) -> Result<()> {
        let cuts = self.compute_cuts();
        validate_joint(&cuts, &self.bit, &self.board)?;
        debug!(
            spacing = self.spacing.value,
            width = self.width.value,
            centered = self.centered,
            count = cuts.len(),
            "equal spacing cuts set"
        );
        self.cuts = cuts;
        Ok(())
    }
}
