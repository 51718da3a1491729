//! Assembled joint geometry
//!
//! The single value handed to a renderer: the template rectangle, both
//! boards shifted into drawing coordinates, both cut sequences with their
//! router passes, and both board outlines.
//!
//! Drawing layout, bottom to top: template, board B (joint on its top
//! edge), board A (joint on its bottom edge), separated by `margins.sep`.

use crate::adjoining::adjoining_cuts;
use crate::bit::RouterBit;
use crate::board::{Board, IncraTemplate, Margins, Rect};
use crate::cut::Cut;
use crate::outline::{board_coords, JointEdge, Point};
use crate::spacing::SpacingStrategy;
use routerjig_core::GeometryError;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct JointGeometry {
    template: IncraTemplate,
    /// Whole template
    rect_t: Rect,
    /// Part of the template under the board, without the end margins
    board_t: Rect,
    board_a: Board,
    board_b: Board,
    a_cuts: Vec<Cut>,
    b_cuts: Vec<Cut>,
    outline_a: Vec<Point>,
    outline_b: Vec<Point>,
}

impl JointGeometry {
    pub fn new<S: SpacingStrategy + ?Sized>(
        template: IncraTemplate,
        board: &Board,
        bit: &RouterBit,
        spacing: &S,
        margins: Margins,
    ) -> Result<Self, GeometryError> {
        let a_cuts = spacing
            .cuts()
            .iter()
            .map(|c| c.with_router_passes(bit, board))
            .collect::<Result<Vec<_>, _>>()?;
        let b_cuts = adjoining_cuts(spacing.cuts(), bit, board)?
            .iter()
            .map(|c| c.with_router_passes(bit, board))
            .collect::<Result<Vec<_>, _>>()?;

        let rect_t = Rect::new(margins.left, margins.bottom, template.length, template.height);
        let board_t = Rect::new(
            rect_t.x_left + template.margin,
            rect_t.y_bottom,
            board.width(),
            template.height,
        );

        let mut board_b = board.clone();
        board_b.shift(board_t.x_left, rect_t.y_top() + margins.sep);
        let outline_b = board_coords(&board_b, &b_cuts, bit, JointEdge::Top)?;

        let board_a = board_b.shifted(0, board.height() + margins.sep);
        let outline_a = board_coords(&board_a, &a_cuts, bit, JointEdge::Bottom)?;

        debug!(
            a_cuts = a_cuts.len(),
            b_cuts = b_cuts.len(),
            kind = %spacing.kind(),
            "joint geometry computed"
        );
        Ok(Self {
            template,
            rect_t,
            board_t,
            board_a,
            board_b,
            a_cuts,
            b_cuts,
            outline_a,
            outline_b,
        })
    }

    pub fn template(&self) -> &IncraTemplate {
        &self.template
    }

    pub fn rect_t(&self) -> &Rect {
        &self.rect_t
    }

    pub fn board_t(&self) -> &Rect {
        &self.board_t
    }

    pub fn board_a(&self) -> &Board {
        &self.board_a
    }

    pub fn board_b(&self) -> &Board {
        &self.board_b
    }

    /// Cuts on board A, with passes
    pub fn a_cuts(&self) -> &[Cut] {
        &self.a_cuts
    }

    /// Cuts on board B, with passes
    pub fn b_cuts(&self) -> &[Cut] {
        &self.b_cuts
    }

    pub fn outline_a(&self) -> &[Point] {
        &self.outline_a
    }

    pub fn outline_b(&self) -> &[Point] {
        &self.outline_b
    }
}
