//! Line segment shape.

use super::{SelectionState, ShapeError, ShapeTrait, require_finite, require_positive};
use crate::surface::{Surface, SurfaceError};
use kurbo::{Point, Rect, Vec2};
use peniko::Color;

/// A stroked line between two points.
///
/// Hit testing treats the segment as the infinite line `y = slope * x + b`
/// and measures the vertical distance to it, so points beyond either end
/// still count as within when they sit close to the extended line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    start: Point,
    end: Point,
    thickness: f64,
    slope: f64,
    intercept: f64,
    selection: SelectionState,
}

impl LineSegment {
    /// Create a new line segment.
    ///
    /// Vertical segments (`start.x == end.x`) have no finite slope and are
    /// rejected.
    pub fn new(start: Point, end: Point, thickness: f64) -> Result<Self, ShapeError> {
        let start = require_finite("line", start)?;
        let end = require_finite("line", end)?;
        let thickness = require_positive("line", "thickness", thickness)?;

        let slope = (start.y - end.y) / (start.x - end.x);
        let intercept = end.y - slope * end.x;
        if !slope.is_finite() || !intercept.is_finite() {
            log::warn!("rejecting vertical line at x = {}", start.x);
            return Err(ShapeError::VerticalLine { x: start.x });
        }

        Ok(Self {
            start,
            end,
            thickness,
            slope,
            intercept,
            selection: SelectionState::default(),
        })
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// The `b` in `y = slope * x + b`.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl ShapeTrait for LineSegment {
    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn is_point_within(&self, point: Point) -> bool {
        (self.slope * point.x + self.intercept - point.y).abs() < self.thickness
    }

    fn draw(
        &self,
        surface: &mut dyn Surface,
        color: Color,
        buffer: f64,
    ) -> Result<(), SurfaceError> {
        let grow = Vec2::new(buffer, buffer);
        surface.set_stroke_color(color)?;
        surface.set_line_width(self.thickness + buffer)?;
        surface.stroke_line(self.start - grow, self.end + grow)
    }

    fn selection(&self) -> &SelectionState {
        &self.selection
    }

    fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::SerializableColor;
    use crate::surface::{DrawCommand, RecordingSurface};
    use kurbo::Size;

    fn diagonal() -> LineSegment {
        LineSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0), 4.0).unwrap()
    }

    #[test]
    fn test_slope_and_intercept() {
        let line = LineSegment::new(Point::new(0.0, 5.0), Point::new(10.0, 25.0), 1.0).unwrap();
        assert!((line.slope() - 2.0).abs() < f64::EPSILON);
        assert!((line.intercept() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_vertical_line_rejected() {
        let result = LineSegment::new(Point::new(3.0, 0.0), Point::new(3.0, 10.0), 2.0);
        assert_eq!(result, Err(ShapeError::VerticalLine { x: 3.0 }));
        assert!(LineSegment::new(Point::new(3.0, 3.0), Point::new(3.0, 3.0), 2.0).is_err());
    }

    #[test]
    fn test_invalid_thickness() {
        assert!(matches!(
            LineSegment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0), 0.0),
            Err(ShapeError::InvalidGeometry { shape: "line", .. })
        ));
    }

    #[test]
    fn test_hit_test_on_line() {
        let line = diagonal();
        assert!(line.is_point_within(Point::new(5.0, 5.0)));
        for thickness in [0.001, 1.0, 50.0] {
            let line =
                LineSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0), thickness).unwrap();
            assert!(line.is_point_within(Point::new(7.0, 7.0)));
        }
    }

    #[test]
    fn test_hit_test_uses_vertical_distance() {
        let line = diagonal();
        assert!(line.is_point_within(Point::new(5.0, 8.5)));
        // Vertical distance 4 is not strictly less than the thickness, even
        // though the perpendicular distance (~2.83) would be.
        assert!(!line.is_point_within(Point::new(5.0, 9.0)));
        assert!(!line.is_point_within(Point::new(5.0, 1.0)));
    }

    #[test]
    fn test_hit_test_is_unbounded() {
        let line = diagonal();
        assert!(line.is_point_within(Point::new(1000.0, 1000.0)));
        assert!(line.is_point_within(Point::new(-50.0, -49.0)));
    }

    #[test]
    fn test_bounds() {
        let line = LineSegment::new(Point::new(50.0, 80.0), Point::new(10.0, 20.0), 1.0).unwrap();
        let bounds = line.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 50.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_draw_with_buffer() {
        let line =
            LineSegment::new(Point::new(120.0, 50.0), Point::new(305.0, 225.0), 4.0).unwrap();
        let mut surface = RecordingSurface::new(Size::new(500.0, 500.0));
        line.draw(&mut surface, Color::from_rgba8(0, 0, 0, 255), 4.0)
            .unwrap();
        assert_eq!(
            surface.commands(),
            &[DrawCommand::StrokeLine {
                from: Point::new(116.0, 46.0),
                to: Point::new(309.0, 229.0),
                width: 8.0,
                color: SerializableColor::black(),
            }]
        );
    }
}
