//! NodePick Core Library
//!
//! Platform-agnostic shapes, hit testing and selection logic. Drawing goes
//! through the [`Surface`] trait so everything here can be exercised without
//! a window or a GPU.

pub mod controller;
pub mod input;
pub mod scene;
pub mod shapes;
pub mod style;
pub mod surface;

pub use controller::{InteractionController, render};
pub use input::{PointerEvent, PointerState};
pub use scene::{Scene, SelectionChange};
pub use shapes::{Circle, LineSegment, Rectangle, Shape, ShapeError, ShapeIndex, VisualState};
pub use style::{Palette, SerializableColor};
pub use surface::{DrawCommand, RecordingSurface, Surface, SurfaceError};

/// A position on the drawing surface, origin at the top-left corner.
pub type Coordinate = kurbo::Point;
