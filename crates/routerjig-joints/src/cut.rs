//! Cuts and router-pass decomposition
//!
//! A cut is one segment `[left, right]` removed from a board's routed edge.
//! To physically make the cut, the router bit is centered at a sequence of
//! x-positions ("passes"). The middle pass is centered (within an interval)
//! on the cut; further passes walk outward, at most one bit width at a time,
//! until the cut is cleared.

use crate::bit::RouterBit;
use crate::board::Board;
use routerjig_core::{GeometryError, Intervals};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cut {
    /// Left (min x) location of the cut
    pub left: Intervals,
    /// Right (max x) location of the cut
    pub right: Intervals,
    /// Centerline of the bit for each router pass, sorted
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    passes: Vec<Intervals>,
    /// The pass centered (within an interval) on the cut
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mid_pass: Option<Intervals>,
}

impl Cut {
    pub fn new(left: Intervals, right: Intervals) -> Self {
        Self {
            left,
            right,
            passes: Vec::new(),
            mid_pass: None,
        }
    }

    pub fn width(&self) -> Intervals {
        self.right - self.left
    }

    /// `(left, right)` bounds, ignoring passes
    pub fn bounds(&self) -> (Intervals, Intervals) {
        (self.left, self.right)
    }

    /// Router passes, empty until [`Cut::make_router_passes`] succeeds
    pub fn passes(&self) -> &[Intervals] {
        &self.passes
    }

    pub fn mid_pass(&self) -> Option<Intervals> {
        self.mid_pass
    }

    /// Copy of this cut moved by `dx`, without passes
    pub fn shifted(&self, dx: Intervals) -> Self {
        Self::new(self.left + dx, self.right + dx)
    }

    pub fn touches_left_edge(&self) -> bool {
        self.left == 0
    }

    pub fn touches_right_edge(&self, board: &Board) -> bool {
        self.right == board.width()
    }

    /// Check the cut against the board bounds and the bit width
    pub fn validate(&self, bit: &RouterBit, board: &Board) -> Result<(), GeometryError> {
        let (left, right) = self.bounds();
        if left >= right {
            return Err(GeometryError::EmptyCut { left, right });
        }
        if left < 0 {
            return Err(GeometryError::LeftOutOfBounds { left, right });
        }
        if right > board.width() {
            return Err(GeometryError::RightOutOfBounds {
                left,
                right,
                board_width: board.width(),
            });
        }
        if right - left < bit.width() && left > 0 && right < board.width() {
            return Err(GeometryError::BitTooWide {
                left,
                right,
                bit_width: bit.width(),
            });
        }
        Ok(())
    }

    /// Compute the passes for the given bit
    ///
    /// The cut is validated first; on error the existing passes are kept.
    pub fn make_router_passes(
        &mut self,
        bit: &RouterBit,
        board: &Board,
    ) -> Result<(), GeometryError> {
        self.validate(bit, board)?;
        let (mid_pass, passes) = router_passes(self.left, self.right, bit, board.width());
        trace!(left = self.left, right = self.right, ?passes, "router passes");
        self.mid_pass = Some(mid_pass);
        self.passes = passes;
        Ok(())
    }

    /// Copy of this cut with its passes computed
    pub fn with_router_passes(&self, bit: &RouterBit, board: &Board) -> Result<Self, GeometryError> {
        let mut cut = self.clone();
        cut.make_router_passes(bit, board)?;
        Ok(cut)
    }
}

/// Pass decomposition of an already-validated cut
///
/// Returns the middle pass and all passes sorted ascending. Relies on the
/// bit width being even.
fn router_passes(
    left: Intervals,
    right: Intervals,
    bit: &RouterBit,
    board_width: Intervals,
) -> (Intervals, Vec<Intervals>) {
    let width = bit.width();
    let half = bit.halfwidth();

    // middle pass and the window [x_left, x_right] it clears
    let (mid_pass, mut x_left, mut x_right) = if left == 0 {
        (right - half, (right - width).max(0), right)
    } else if right == board_width {
        (left + half, left, (left + width).min(board_width))
    } else {
        let mut mid = (left + right) / 2;
        let mut x_left = mid - half;
        if x_left < left {
            // odd cut width
            x_left = left;
            mid = left + half;
        }
        (mid, x_left, (x_left + width).min(board_width))
    };

    let mut passes = vec![mid_pass];
    while x_left > left {
        x_left = (x_left - width).max(left);
        passes.push(x_left + half);
    }
    while x_right < right {
        x_right = (x_right + width).min(right);
        passes.push(x_right - half);
    }
    passes.sort_unstable();
    (mid_pass, passes)
}

/// Validate an ordered cut sequence for one edge
///
/// The sequence must be non-empty, every cut must be valid, and each cut
/// must start strictly after the previous one ends.
pub fn validate_cut_sequence(
    cuts: &[Cut],
    bit: &RouterBit,
    board: &Board,
) -> Result<(), GeometryError> {
    if cuts.is_empty() {
        return Err(GeometryError::NoCuts);
    }
    for (index, cut) in cuts.iter().enumerate() {
        cut.validate(bit, board)?;
        if index > 0 {
            let previous = &cuts[index - 1];
            if cut.left <= previous.right {
                return Err(GeometryError::Overlap {
                    index,
                    left: cut.left,
                    previous: index - 1,
                    previous_right: previous.right,
                });
            }
        }
    }
    Ok(())
}
