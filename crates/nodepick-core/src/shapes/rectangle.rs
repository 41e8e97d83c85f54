//! Rectangle shape.

use super::{SelectionState, ShapeError, ShapeTrait, require_finite, require_positive};
use crate::surface::{Surface, SurfaceError};
use kurbo::{Point, Rect};
use peniko::Color;

/// An axis-aligned filled rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// Top-left corner position.
    top_left: Point,
    /// Width of the rectangle.
    width: f64,
    /// Height of the rectangle.
    height: f64,
    selection: SelectionState,
}

impl Rectangle {
    /// Create a new rectangle from its top-left corner and size.
    pub fn new(top_left: Point, width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            top_left: require_finite("rectangle", top_left)?,
            width: require_positive("rectangle", "width", width)?,
            height: require_positive("rectangle", "height", height)?,
            selection: SelectionState::default(),
        })
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// Corner opposite to [`top_left`](Self::top_left).
    pub fn bottom_right(&self) -> Point {
        Point::new(self.top_left.x + self.width, self.top_left.y + self.height)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.top_left, self.bottom_right())
    }
}

impl ShapeTrait for Rectangle {
    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn is_point_within(&self, point: Point) -> bool {
        // Open rectangle: the edges themselves are outside.
        let bottom_right = self.bottom_right();
        point.x > self.top_left.x
            && point.x < bottom_right.x
            && point.y > self.top_left.y
            && point.y < bottom_right.y
    }

    fn draw(
        &self,
        surface: &mut dyn Surface,
        color: Color,
        buffer: f64,
    ) -> Result<(), SurfaceError> {
        surface.set_fill_color(color)?;
        surface.fill_rect(self.as_rect().inflate(buffer, buffer))
    }

    fn selection(&self) -> &SelectionState {
        &self.selection
    }

    fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }
}
