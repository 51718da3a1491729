//! # routerjig Joints
//!
//! Joint geometry for router-cut box joints and dovetails. Given a board,
//! a router bit, and a spacing strategy, this crate computes a validated set
//! of non-overlapping cuts, the complementary cuts on the mating board, the
//! router passes needed to realize every cut, and the outline polygons used
//! to draw the joint and its template.
//!
//! ## Core Components
//!
//! - **Router bit**: cutting geometry (width, depth, angle) and derived offset/neck
//! - **Board / Template**: rectangular stock and the jig template it is routed on
//! - **Cut**: one removed edge segment and its router-pass decomposition
//! - **Adjoining cuts**: the mating board's cuts, derived from one board's cuts
//! - **Outline**: closed board perimeter including the routed profile
//! - **Spacing**: Equal, Variable and Edit strategies producing cut sequences
//! - **Design**: the document model tying parameters, strategies and geometry together
//!
//! ## Pipeline
//!
//! ```text
//! parameters ──> SpacingStrategy::set_cuts ──> A cuts
//!                                               ├── adjoining_cuts ──> B cuts
//!                                               └── make_router_passes (A and B)
//!                                                         └── board_coords ──> JointGeometry
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use routerjig_joints::{
//!     Board, EqualSpacing, IncraTemplate, JointGeometry, Margins, RouterBit, SpacingConfig,
//!     Units,
//! };
//!
//! # fn main() -> routerjig_joints::Result<()> {
//! let units = Units::default();
//! let bit = RouterBit::new(16, 24, 0.0)?;
//! let board = Board::new(240, 32, 32)?;
//! let spacing = EqualSpacing::new(&bit, &board, &SpacingConfig::new(units))?;
//! let template = IncraTemplate::new(&board, &units);
//! let geometry = JointGeometry::new(template, &board, &bit, &spacing, Margins::default())?;
//! assert!(!geometry.b_cuts().is_empty());
//! # Ok(())
//! # }
//! ```

pub mod adjoining;
pub mod bit;
pub mod board;
pub mod cut;
pub mod design;
pub mod geometry;
pub mod outline;
pub mod params;
pub mod spacing;
pub mod undo;

pub use adjoining::{adjoining_cuts, validate_joint};
pub use bit::RouterBit;
pub use board::{Board, IncraTemplate, Margins, Rect};
pub use cut::{validate_cut_sequence, Cut};
pub use design::{DesignError, DesignResult, JointDesign};
pub use geometry::JointGeometry;
pub use outline::{board_coords, JointEdge, Point};
pub use params::{BitParams, BoardParams, JointParams, SpacingParams};
pub use spacing::{
    EditSpacing, EditState, Editable, EqualSpacing, Spacing, SpacingConfig, SpacingKind, SpacingParam,
    SpacingStrategy, VariableSpacing,
};
pub use undo::{UndoStack, DEFAULT_UNDO_DEPTH};

pub use routerjig_core::{ConfigurationError, Error, GeometryError, Intervals, Result, Units};
