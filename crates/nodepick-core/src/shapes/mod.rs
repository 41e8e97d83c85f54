//! Shape definitions for the scene.

mod circle;
mod line;
mod rectangle;

pub use circle::Circle;
pub use line::LineSegment;
pub use rectangle::Rectangle;

use crate::style::Palette;
use crate::surface::{Surface, SurfaceError};
use kurbo::{Point, Rect};
use peniko::Color;
use thiserror::Error;

/// Distance the hover and selection highlights extend past a shape's boundary.
pub const HIGHLIGHT_BUFFER: f64 = 4.0;

/// Position of a shape within its [`Scene`](crate::Scene).
pub type ShapeIndex = usize;

/// Errors raised while constructing a shape.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    #[error("invalid {shape} geometry: {reason}")]
    InvalidGeometry {
        shape: &'static str,
        reason: String,
    },
    #[error("{shape} coordinate ({x}, {y}) is not finite")]
    NonFiniteCoordinate {
        shape: &'static str,
        x: f64,
        y: f64,
    },
    #[error("line segment from x = {x} is vertical and has no finite slope")]
    VerticalLine { x: f64 },
}

/// Check that a size-like value (radius, width, thickness) is finite and positive.
pub(crate) fn require_positive(
    shape: &'static str,
    name: &str,
    value: f64,
) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        log::warn!("rejecting {shape} with {name} = {value}");
        Err(ShapeError::InvalidGeometry {
            shape,
            reason: format!("{name} must be a finite number greater than zero, got {value}"),
        })
    }
}

pub(crate) fn require_finite(shape: &'static str, point: Point) -> Result<Point, ShapeError> {
    if point.is_finite() {
        Ok(point)
    } else {
        log::warn!("rejecting {shape} at non-finite point {point:?}");
        Err(ShapeError::NonFiniteCoordinate {
            shape,
            x: point.x,
            y: point.y,
        })
    }
}

/// Selection flag carried by every shape.
///
/// Both mutations are idempotent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: bool,
}

impl SelectionState {
    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Which highlight a shape receives in the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    /// The pointer is within the shape. Takes precedence over selection.
    Hovered,
    /// Selected and not hovered.
    Selected,
    /// Only the base shape is drawn.
    Idle,
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the bounding box in surface coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point lies within this shape.
    fn is_point_within(&self, point: Point) -> bool;

    /// Paint the shape in `color`, grown outward by `buffer` units.
    ///
    /// Sets its own fill or stroke style; the previous surface style is not
    /// restored.
    fn draw(
        &self,
        surface: &mut dyn Surface,
        color: Color,
        buffer: f64,
    ) -> Result<(), SurfaceError>;

    /// Get the selection state.
    fn selection(&self) -> &SelectionState;

    /// Get mutable selection state.
    fn selection_mut(&mut self) -> &mut SelectionState;
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Line(LineSegment),
}

impl Shape {
    /// Short name of the variant, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "circle",
            Shape::Rectangle(_) => "rectangle",
            Shape::Line(_) => "line",
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Circle(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
        }
    }

    pub fn is_point_within(&self, point: Point) -> bool {
        match self {
            Shape::Circle(s) => s.is_point_within(point),
            Shape::Rectangle(s) => s.is_point_within(point),
            Shape::Line(s) => s.is_point_within(point),
        }
    }

    pub fn draw(
        &self,
        surface: &mut dyn Surface,
        color: Color,
        buffer: f64,
    ) -> Result<(), SurfaceError> {
        match self {
            Shape::Circle(s) => s.draw(surface, color, buffer),
            Shape::Rectangle(s) => s.draw(surface, color, buffer),
            Shape::Line(s) => s.draw(surface, color, buffer),
        }
    }

    pub fn select(&mut self) {
        match self {
            Shape::Circle(s) => s.selection_mut().select(),
            Shape::Rectangle(s) => s.selection_mut().select(),
            Shape::Line(s) => s.selection_mut().select(),
        }
    }

    pub fn deselect(&mut self) {
        match self {
            Shape::Circle(s) => s.selection_mut().deselect(),
            Shape::Rectangle(s) => s.selection_mut().deselect(),
            Shape::Line(s) => s.selection_mut().deselect(),
        }
    }

    pub fn is_selected(&self) -> bool {
        match self {
            Shape::Circle(s) => s.selection().is_selected(),
            Shape::Rectangle(s) => s.selection().is_selected(),
            Shape::Line(s) => s.selection().is_selected(),
        }
    }

    /// Decide which highlight applies for the given pointer position.
    pub fn visual_state(&self, pointer: Point) -> VisualState {
        if self.is_point_within(pointer) {
            VisualState::Hovered
        } else if self.is_selected() {
            VisualState::Selected
        } else {
            VisualState::Idle
        }
    }

    /// Draw the shape for one frame.
    ///
    /// At most one highlight is painted (hover wins over selection), then the
    /// base shape is painted on top of it.
    pub fn draw_and_check_coordinate(
        &self,
        surface: &mut dyn Surface,
        pointer: Point,
        palette: &Palette,
    ) -> Result<(), SurfaceError> {
        match self.visual_state(pointer) {
            VisualState::Hovered => self.draw(surface, palette.hover(), HIGHLIGHT_BUFFER)?,
            VisualState::Selected => self.draw(surface, palette.selected(), HIGHLIGHT_BUFFER)?,
            VisualState::Idle => {}
        }
        self.draw(surface, palette.base(), 0.0)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<LineSegment> for Shape {
    fn from(line: LineSegment) -> Self {
        Shape::Line(line)
    }
}
