//! Circle shape.

use super::{SelectionState, ShapeError, ShapeTrait, require_finite, require_positive};
use crate::surface::{Surface, SurfaceError};
use kurbo::{Point, Rect};
use peniko::Color;

/// A filled circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    selection: SelectionState,
}

impl Circle {
    /// Create a new circle. The radius must be finite and positive.
    pub fn new(center: Point, radius: f64) -> Result<Self, ShapeError> {
        Ok(Self {
            center: require_finite("circle", center)?,
            radius: require_positive("circle", "radius", radius)?,
            selection: SelectionState::default(),
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl ShapeTrait for Circle {
    fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }

    fn is_point_within(&self, point: Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        (dx * dx + dy * dy).sqrt() <= self.radius
    }

    fn draw(
        &self,
        surface: &mut dyn Surface,
        color: Color,
        buffer: f64,
    ) -> Result<(), SurfaceError> {
        surface.set_fill_color(color)?;
        surface.fill_circle(self.center, self.radius + buffer)
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

    #[test]
    fn test_circle_creation() {
        let circle = Circle::new(Point::new(440.0, 60.0), 50.0).unwrap();
        assert!((circle.center().x - 440.0).abs() < f64::EPSILON);
        assert!((circle.center().y - 60.0).abs() < f64::EPSILON);
        assert!((circle.radius() - 50.0).abs() < f64::EPSILON);
        assert!(!circle.selection().is_selected());
    }

    #[test]
    fn test_invalid_radius() {
        assert!(matches!(
            Circle::new(Point::ZERO, 0.0),
            Err(ShapeError::InvalidGeometry { shape: "circle", .. })
        ));
        assert!(Circle::new(Point::ZERO, -5.0).is_err());
        assert!(matches!(
            Circle::new(Point::new(f64::NAN, 0.0), 5.0),
            Err(ShapeError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn test_hit_test_center() {
        let circle = Circle::new(Point::new(440.0, 60.0), 50.0).unwrap();
        assert!(circle.is_point_within(Point::new(440.0, 60.0)));
    }

    #[test]
    fn test_hit_test_edge() {
        let circle = Circle::new(Point::new(0.0, 0.0), 5.0).unwrap();
        // Exactly on the radius counts as inside.
        assert!(circle.is_point_within(Point::new(5.0, 0.0)));
        assert!(circle.is_point_within(Point::new(3.0, 4.0)));
        assert!(circle.is_point_within(Point::new(-3.0, -4.0)));
        assert!(!circle.is_point_within(Point::new(3.0, 4.1)));
        assert!(!circle.is_point_within(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_bounds() {
        let circle = Circle::new(Point::new(50.0, 40.0), 10.0).unwrap();
        let bounds = circle.bounds();
        assert!((bounds.x0 - 40.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 60.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_draw_with_buffer() {
        let circle = Circle::new(Point::new(20.0, 20.0), 10.0).unwrap();
        let mut surface = RecordingSurface::new(Size::new(50.0, 50.0));
        let color = Color::from_rgba8(1, 2, 3, 255);
        circle.draw(&mut surface, color, 4.0).unwrap();
        assert_eq!(
            surface.commands(),
            &[DrawCommand::FillCircle {
                center: Point::new(20.0, 20.0),
                radius: 14.0,
                color: SerializableColor::new(1, 2, 3, 255),
            }]
        );
    }
}
