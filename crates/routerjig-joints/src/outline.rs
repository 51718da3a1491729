//! Board outlines
//!
//! Perimeter polygons of a board whose edge has been routed. The routed edge
//! is always traversed in `+x`; the joint edge decides whether that means
//! going clockwise (top) or counter-clockwise (bottom).

use crate::bit::RouterBit;
use crate::board::Board;
use crate::cut::Cut;
use routerjig_core::{GeometryError, Intervals};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer point in drawing coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: Intervals,
    pub y: Intervals,
}

impl Point {
    pub fn new(x: Intervals, y: Intervals) -> Self {
        Self { x, y }
    }
}

impl From<(Intervals, Intervals)> for Point {
    fn from((x, y): (Intervals, Intervals)) -> Self {
        Self::new(x, y)
    }
}

/// Which edge of the board carries the joint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointEdge {
    Top,
    Bottom,
}

impl JointEdge {
    /// Direction from the origin edge towards the routed edge
    fn sign(self) -> Intervals {
        match self {
            JointEdge::Top => 1,
            JointEdge::Bottom => -1,
        }
    }
}

impl fmt::Display for JointEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JointEdge::Top => write!(f, "top"),
            JointEdge::Bottom => write!(f, "bottom"),
        }
    }
}

/// Compute the closed perimeter of `board` with `cuts` routed into `edge`
///
/// The first point is repeated at the end. Cuts are offsets from the
/// board's left edge.
pub fn board_coords(
    board: &Board,
    cuts: &[Cut],
    bit: &RouterBit,
    edge: JointEdge,
) -> Result<Vec<Point>, GeometryError> {
    let (first, last) = match (cuts.first(), cuts.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(GeometryError::NoCuts),
    };
    let sign = edge.sign();
    let x_org = board.x_left();
    let y_org = match edge {
        JointEdge::Top => board.y_bottom(),
        JointEdge::Bottom => board.y_top(),
    };
    let y_nocut = y_org + sign * board.height();
    let y_cut = y_nocut - sign * bit.depth();
    let offset = bit.offset();
    let width = board.width();

    let mut points = Vec::with_capacity(4 * cuts.len() + 5);
    points.push(Point::new(x_org, y_org));
    if first.left > 0 {
        points.push(Point::new(x_org, y_nocut));
    } else {
        points.push(Point::new(x_org, y_cut));
    }

    for cut in cuts {
        if cut.left > 0 {
            // surface, start of cut
            points.push(Point::new(x_org + cut.left + offset, y_nocut));
        }
        points.push(Point::new(x_org + cut.left, y_cut));
        points.push(Point::new(x_org + cut.right, y_cut));
        if cut.right < width {
            // surface, end of cut
            points.push(Point::new(x_org + cut.right - offset, y_nocut));
        }
    }

    if last.right < width {
        points.push(Point::new(x_org + width, y_nocut));
    }
    // corner on the unrouted edge, then close
    points.push(Point::new(x_org + width, y_org));
    points.push(Point::new(x_org, y_org));
    Ok(points)
}
