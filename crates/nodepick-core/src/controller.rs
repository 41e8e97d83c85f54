//! Pointer-driven interaction and the per-frame redraw.

use crate::input::{PointerEvent, PointerState};
use crate::scene::{Scene, SelectionChange};
use crate::style::Palette;
use crate::surface::{Surface, SurfaceError};
use kurbo::{Point, Rect};

/// Radius of the dot drawn at the pointer position.
pub const POINTER_INDICATOR_RADIUS: f64 = 5.0;

/// Draw one full frame: clear, every shape in scene order, then the pointer.
///
/// Rendering only reads state, so calling it repeatedly without changes
/// produces the same frame.
pub fn render(
    scene: &Scene,
    pointer: Point,
    palette: &Palette,
    surface: &mut dyn Surface,
) -> Result<(), SurfaceError> {
    let full = Rect::from_origin_size(Point::ZERO, surface.size());
    surface.clear(full)?;

    for shape in scene.iter() {
        shape.draw_and_check_coordinate(surface, pointer, palette)?;
    }

    surface.set_fill_color(palette.hover())?;
    surface.fill_circle(pointer, POINTER_INDICATOR_RADIUS)
}

/// Owns the scene and pointer state and applies pointer events to them.
#[derive(Debug, Clone)]
pub struct InteractionController {
    scene: Scene,
    pointer: PointerState,
    palette: Palette,
    needs_redraw: bool,
}

impl InteractionController {
    pub fn new(scene: Scene, palette: Palette) -> Self {
        Self {
            scene,
            pointer: PointerState::new(),
            palette,
            needs_redraw: true,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn pointer(&self) -> Point {
        self.pointer.position
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Whether an event arrived since the last [`redraw`](Self::redraw).
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Apply a pointer event to the pointer state or the scene.
    ///
    /// Returns the selection change for pointer-down events.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<SelectionChange> {
        self.needs_redraw = true;
        match event {
            PointerEvent::Move { .. } => {
                self.pointer.handle_pointer_event(event);
                None
            }
            PointerEvent::Down { position } => Some(self.scene.pointer_down(position)),
            PointerEvent::Up { position } => {
                self.scene.pointer_up(position);
                None
            }
        }
    }

    /// Draw the current state onto `surface`.
    pub fn redraw(&mut self, surface: &mut dyn Surface) -> Result<(), SurfaceError> {
        render(&self.scene, self.pointer.position, &self.palette, surface)?;
        self.needs_redraw = false;
        Ok(())
    }

    /// Handle an event and redraw right away.
    pub fn dispatch(
        &mut self,
        event: PointerEvent,
        surface: &mut dyn Surface,
    ) -> Result<Option<SelectionChange>, SurfaceError> {
        let change = self.handle_event(event);
        self.redraw(surface)?;
        Ok(change)
    }
}
