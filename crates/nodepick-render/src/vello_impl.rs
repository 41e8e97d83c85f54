//! Vello-based surface implementation.

use kurbo::{Affine, Cap, Circle, Line, Point, Rect, Size, Stroke};
use nodepick_core::{Surface, SurfaceError};
use peniko::{Color, Fill};
use vello::Scene;

/// Surface that records draw calls into a [`vello::Scene`].
///
/// The host renders [`scene`](Self::scene) to the GPU after each frame.
pub struct VelloSurface {
    /// The Vello scene being built.
    scene: Scene,
    /// Drawable area in physical pixels.
    size: Size,
    /// Color painted by [`Surface::clear`].
    background: Color,
    fill: Color,
    stroke: Color,
    line_width: f64,
    detached: bool,
}

impl VelloSurface {
    pub fn new(size: Size, background: Color) -> Self {
        Self {
            scene: Scene::new(),
            size,
            background,
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
            detached: false,
        }
    }

    /// The scene built by the draw calls since the last full clear.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Mark the surface as released. Any later draw call fails.
    pub fn detach(&mut self) {
        self.detached = true;
        self.scene.reset();
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    fn check(&self) -> Result<(), SurfaceError> {
        if self.detached {
            Err(SurfaceError::Detached)
        } else {
            Ok(())
        }
    }
}

impl Surface for VelloSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        self.check()?;
        // A full clear drops all earlier commands instead of painting over them.
        let full = Rect::from_origin_size(Point::ZERO, self.size);
        if rect.union(full) == rect {
            self.scene.reset();
        }
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, self.background, None, &rect);
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.check()?;
        self.fill = color;
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.check()?;
        self.stroke = color;
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> Result<(), SurfaceError> {
        self.check()?;
        self.line_width = width;
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError> {
        self.check()?;
        let circle = Circle::new(center, radius);
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, self.fill, None, &circle);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        self.check()?;
        self.scene
            .fill(Fill::NonZero, Affine::IDENTITY, self.fill, None, &rect);
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point) -> Result<(), SurfaceError> {
        self.check()?;
        let stroke = Stroke::new(self.line_width).with_caps(Cap::Butt);
        self.scene.stroke(
            &stroke,
            Affine::IDENTITY,
            self.stroke,
            None,
            &Line::new(from, to),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nodepick_core::{InteractionController, Palette, PointerEvent, Scene as ShapeScene};

    fn surface() -> VelloSurface {
        VelloSurface::new(Size::new(500.0, 500.0), Color::WHITE)
    }

    #[test]
    fn test_new_surface_is_empty() {
        let surface = surface();
        assert!(surface.scene().encoding().is_empty());
        assert_eq!(surface.size(), Size::new(500.0, 500.0));
        assert!(!surface.is_detached());
    }

    #[test]
    fn test_redraw_fills_scene() {
        let mut controller =
            InteractionController::new(ShapeScene::sample().unwrap(), Palette::default());
        let mut surface = surface();
        controller
            .dispatch(
                PointerEvent::Move {
                    position: Point::new(440.0, 60.0),
                },
                &mut surface,
            )
            .unwrap();
        assert!(!surface.scene().encoding().is_empty());
    }

    #[test]
    fn test_detached_surface_fails() {
        let mut surface = surface();
        surface.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        surface.detach();
        assert!(surface.scene().encoding().is_empty());
        assert_eq!(
            surface.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0)),
            Err(SurfaceError::Detached)
        );
        assert_eq!(surface.clear(Rect::ZERO), Err(SurfaceError::Detached));
    }
}
