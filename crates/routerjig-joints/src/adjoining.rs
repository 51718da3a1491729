//! Cuts on the mating board
//!
//! Given the cuts on one board's edge, the cuts on the adjoining edge fill
//! the material left between them. A dovetail bit shifts the boundary seen
//! at the board surface by `bit.offset` relative to the boundary at cut
//! depth, so every adjoining cut is widened by the offset on each side.

use crate::bit::RouterBit;
use crate::board::Board;
use crate::cut::{validate_cut_sequence, Cut};
use routerjig_core::GeometryError;

/// Compute the cuts on the edge that adjoins `cuts`
pub fn adjoining_cuts(
    cuts: &[Cut],
    bit: &RouterBit,
    board: &Board,
) -> Result<Vec<Cut>, GeometryError> {
    let (first, last) = match (cuts.first(), cuts.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(GeometryError::NoCuts),
    };
    let offset = bit.offset();
    let mut adjoining = Vec::with_capacity(cuts.len() + 1);

    // the left-most cut does not include the left edge, so the adjoining
    // edge needs one that does
    if first.left > 0 {
        adjoining.push(Cut::new(0, first.left + offset));
    }

    // each adjoining cut spans from where the previous cut ended to where
    // the next one starts, never narrower than the bit
    for pair in cuts.windows(2) {
        let left = pair[0].right - offset;
        let right = (left + bit.width()).max(pair[1].left + offset);
        adjoining.push(Cut::new(left, right));
    }

    if last.right < board.width() {
        adjoining.push(Cut::new(last.right - offset, board.width()));
    }
    Ok(adjoining)
}

/// Validate a cut sequence and the adjoining sequence derived from it
pub fn validate_joint(cuts: &[Cut], bit: &RouterBit, board: &Board) -> Result<(), GeometryError> {
    validate_cut_sequence(cuts, bit, board)?;
    let adjoining = adjoining_cuts(cuts, bit, board)?;
    validate_cut_sequence(&adjoining, bit, board)
}
