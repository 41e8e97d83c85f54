//! Pointer events and pointer state.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Up { position: Point },
    Move { position: Point },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Up { position }
            | PointerEvent::Move { position } => position,
        }
    }
}

/// Tracks where the pointer is. Only move events update it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Current pointer position in surface coordinates.
    pub position: Point,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a pointer event. Returns true if the position changed.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Move { position } => {
                let changed = self.position != position;
                self.position = position;
                changed
            }
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_origin() {
        assert_eq!(PointerState::new().position, Point::ZERO);
    }

    #[test]
    fn test_only_move_updates_position() {
        let mut state = PointerState::new();
        assert!(state.handle_pointer_event(PointerEvent::Move {
            position: Point::new(10.0, 20.0)
        }));
        assert!(!state.handle_pointer_event(PointerEvent::Down {
            position: Point::new(99.0, 99.0)
        }));
        assert!(!state.handle_pointer_event(PointerEvent::Up {
            position: Point::new(99.0, 99.0)
        }));
        assert_eq!(state.position, Point::new(10.0, 20.0));
        assert!(!state.handle_pointer_event(PointerEvent::Move {
            position: Point::new(10.0, 20.0)
        }));
    }

    #[test]
    fn test_event_serialization_roundtrip() {
        let event = PointerEvent::Down {
            position: Point::new(440.0, 60.0),
        };
        let json = serde_json::to_string(&event).unwrap();
        let restored: PointerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, event);
    }

    #[test]
    fn test_event_position() {
        let event = PointerEvent::Up {
            position: Point::new(1.0, 2.0),
        };
        assert_eq!(event.position(), Point::new(1.0, 2.0));
    }
}
