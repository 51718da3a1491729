//! Boards, the Incra template, and drawing margins
//!
//! A board's `width` is the dimension of the routed edge (x-axis), its
//! `height` is perpendicular to the routed edge (y-axis) and its
//! `thickness` is into the page. All dimensions are in intervals.

use crate::outline::Point;
use routerjig_core::{ConfigurationError, Intervals, Units};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left x-coordinate
    pub x_left: Intervals,
    /// Bottom y-coordinate
    pub y_bottom: Intervals,
    /// Extent in x
    pub width: Intervals,
    /// Extent in y
    pub height: Intervals,
}

impl Rect {
    pub fn new(x_left: Intervals, y_bottom: Intervals, width: Intervals, height: Intervals) -> Self {
        Self {
            x_left,
            y_bottom,
            width,
            height,
        }
    }

    pub fn x_right(&self) -> Intervals {
        self.x_left + self.width
    }

    pub fn y_top(&self) -> Intervals {
        self.y_bottom + self.height
    }

    /// x-coordinate of the midpoint (floored)
    pub fn x_mid(&self) -> Intervals {
        self.x_left + self.width / 2
    }

    /// y-coordinate of the midpoint (floored)
    pub fn y_mid(&self) -> Intervals {
        self.y_bottom + self.height / 2
    }

    /// Corners as a closed polygon, counter-clockwise from the lower left
    pub fn corners(&self) -> Vec<Point> {
        vec![
            Point::new(self.x_left, self.y_bottom),
            Point::new(self.x_right(), self.y_bottom),
            Point::new(self.x_right(), self.y_top()),
            Point::new(self.x_left, self.y_top()),
            Point::new(self.x_left, self.y_bottom),
        ]
    }

    pub fn shift(&mut self, dx: Intervals, dy: Intervals) {
        self.x_left += dx;
        self.y_bottom += dy;
    }
}

/// A board of wood with a routed edge along x
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rect: Rect,
    thickness: Intervals,
    /// Inactive boards are optional double-board layers that are not drawn
    active: bool,
    /// Wood or finish tag, carried for the renderer
    wood: Option<String>,
}

impl Board {
    /// Create a board at the origin
    pub fn new(
        width: Intervals,
        height: Intervals,
        thickness: Intervals,
    ) -> Result<Self, ConfigurationError> {
        check_positive("Board width", width)?;
        check_positive("Board height", height)?;
        check_positive("Board thickness", thickness)?;
        Ok(Self {
            rect: Rect::new(0, 0, width, height),
            thickness,
            active: true,
            wood: None,
        })
    }

    /// Board of the given width with the default 32-interval height and thickness
    pub fn with_width(width: Intervals) -> Result<Self, ConfigurationError> {
        Self::new(width, 32, 32)
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn width(&self) -> Intervals {
        self.rect.width
    }

    pub fn height(&self) -> Intervals {
        self.rect.height
    }

    pub fn thickness(&self) -> Intervals {
        self.thickness
    }

    pub fn x_left(&self) -> Intervals {
        self.rect.x_left
    }

    pub fn y_bottom(&self) -> Intervals {
        self.rect.y_bottom
    }

    pub fn x_right(&self) -> Intervals {
        self.rect.x_right()
    }

    pub fn y_top(&self) -> Intervals {
        self.rect.y_top()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn wood(&self) -> Option<&str> {
        self.wood.as_deref()
    }

    pub fn set_width(&mut self, width: Intervals) -> Result<(), ConfigurationError> {
        check_positive("Board width", width)?;
        self.rect.width = width;
        Ok(())
    }

    pub fn set_height(&mut self, height: Intervals) -> Result<(), ConfigurationError> {
        check_positive("Board height", height)?;
        self.rect.height = height;
        Ok(())
    }

    pub fn set_thickness(&mut self, thickness: Intervals) -> Result<(), ConfigurationError> {
        check_positive("Board thickness", thickness)?;
        self.thickness = thickness;
        Ok(())
    }

    pub fn set_width_from_str(&mut self, s: &str, units: &Units) -> Result<(), ConfigurationError> {
        let width = units.string_to_intervals(s, "Board width")?;
        check_positive("Board width", width)
            .map_err(|_| ConfigurationError::not_positive("Board width", s))?;
        self.set_width(width)
    }

    pub fn set_height_from_str(&mut self, s: &str, units: &Units) -> Result<(), ConfigurationError> {
        let height = units.string_to_intervals(s, "Board height")?;
        check_positive("Board height", height)
            .map_err(|_| ConfigurationError::not_positive("Board height", s))?;
        self.set_height(height)
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn set_wood(&mut self, wood: Option<String>) {
        self.wood = wood;
    }

    /// Move the board by `dx`, `dy`
    pub fn shift(&mut self, dx: Intervals, dy: Intervals) {
        self.rect.shift(dx, dy);
    }

    /// Copy of this board moved by `dx`, `dy`
    pub fn shifted(&self, dx: Intervals, dy: Intervals) -> Self {
        let mut board = self.clone();
        board.shift(dx, dy);
        board
    }
}

fn check_positive(name: &str, value: Intervals) -> Result<(), ConfigurationError> {
    if value <= 0 {
        return Err(ConfigurationError::not_positive(name, value));
    }
    Ok(())
}

/// Properties of an Incra template
///
/// * `height` - dimension in y; Incra templates are 1/2" high
/// * `margin` - dimension in x placed on each end of the template
/// * `length` - total length of the template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncraTemplate {
    pub height: Intervals,
    pub margin: Intervals,
    pub length: Intervals,
}

impl IncraTemplate {
    /// Template with a 1" margin on each end of the board
    pub fn new(board: &Board, units: &Units) -> Self {
        Self::with_dimensions(board, units, None, None)
    }

    pub fn with_dimensions(
        board: &Board,
        units: &Units,
        margin: Option<Intervals>,
        length: Option<Intervals>,
    ) -> Self {
        let margin = margin.unwrap_or_else(|| units.inches_to_intervals(1.0));
        let length = length.unwrap_or(board.width() + 2 * margin);
        Self {
            height: units.inches_to_intervals(0.5),
            margin,
            length,
        }
    }
}

/// Drawing margins around the template and between the boards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    /// Space to the left of the template
    pub left: Intervals,
    /// Space below the template
    pub bottom: Intervals,
    /// Separation between template and boards, and between the boards
    pub sep: Intervals,
}

impl Margins {
    /// Margins of `inches` on every side, expressed in `units`
    pub fn uniform(units: &Units, inches: f64) -> Self {
        let m = units.inches_to_intervals(inches);
        Self {
            left: m,
            bottom: m,
            sep: m,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(&Units::default(), 0.25)
    }
}
