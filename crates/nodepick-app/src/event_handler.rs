//! Translation of window input into pointer events.

use kurbo::Point;
use nodepick_core::PointerEvent;
use winit::event::ElementState;

/// Turns winit cursor and button input into [`PointerEvent`]s.
///
/// Button events carry no position, so the last cursor position is reused.
#[derive(Debug, Clone, Default)]
pub struct EventHandler {
    /// Last cursor position in logical surface coordinates.
    cursor: Point,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Cursor moved to `position` (logical pixels, relative to the surface).
    pub fn cursor_moved(&mut self, position: Point) -> PointerEvent {
        self.cursor = position;
        PointerEvent::Move { position }
    }

    /// Any mouse button changed state at the current cursor position.
    pub fn button(&self, state: ElementState) -> PointerEvent {
        let position = self.cursor;
        match state {
            ElementState::Pressed => PointerEvent::Down { position },
            ElementState::Released => PointerEvent::Up { position },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_uses_last_cursor_position() {
        let mut handler = EventHandler::new();
        assert_eq!(
            handler.button(ElementState::Pressed),
            PointerEvent::Down {
                position: Point::ZERO
            }
        );

        let moved = handler.cursor_moved(Point::new(440.0, 60.0));
        assert_eq!(
            moved,
            PointerEvent::Move {
                position: Point::new(440.0, 60.0)
            }
        );
        assert_eq!(
            handler.button(ElementState::Pressed),
            PointerEvent::Down {
                position: Point::new(440.0, 60.0)
            }
        );
        assert_eq!(
            handler.button(ElementState::Released),
            PointerEvent::Up {
                position: Point::new(440.0, 60.0)
            }
        );
    }
}
