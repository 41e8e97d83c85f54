//! Ordered shape collection and pointer-driven selection.

use crate::shapes::{Circle, LineSegment, Rectangle, Shape, ShapeError, ShapeIndex};
use kurbo::Point;

/// Outcome of a pointer-down on the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    /// Nothing was hit, so every shape was deselected.
    Cleared,
    /// These shapes were hit and are now selected. Others kept their state.
    Added(Vec<ShapeIndex>),
}

/// All shapes in the view, back to front.
///
/// Insertion order is render order; there is no z-reordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// The three shapes shown on startup: a circle, a rectangle and a line.
    pub fn sample() -> Result<Self, ShapeError> {
        Ok(Self::from_shapes([
            Circle::new(Point::new(440.0, 60.0), 50.0)?.into(),
            Rectangle::new(Point::new(5.0, 5.0), 100.0, 200.0)?.into(),
            LineSegment::new(Point::new(120.0, 50.0), Point::new(305.0, 225.0), 4.0)?.into(),
        ]))
    }

    pub fn from_shapes(shapes: impl IntoIterator<Item = Shape>) -> Self {
        Self {
            shapes: shapes.into_iter().collect(),
        }
    }

    /// Add a shape on top of the existing ones.
    pub fn push(&mut self, shape: impl Into<Shape>) -> ShapeIndex {
        self.shapes.push(shape.into());
        self.shapes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: ShapeIndex) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Shapes in render order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Indices of every shape containing `point`, in scene order.
    pub fn hits(&self, point: Point) -> Vec<ShapeIndex> {
        self.shapes
            .iter()
            .enumerate()
            .filter(|(_, shape)| shape.is_point_within(point))
            .map(|(index, _)| index)
            .collect()
    }

    /// Indices of the currently selected shapes.
    pub fn selected(&self) -> Vec<ShapeIndex> {
        self.shapes
            .iter()
            .enumerate()
            .filter(|(_, shape)| shape.is_selected())
            .map(|(index, _)| index)
            .collect()
    }

    /// Apply a pointer-down at `position`.
    ///
    /// Clicking empty space clears the whole selection. Clicking one or more
    /// shapes adds all of them to the selection.
    pub fn pointer_down(&mut self, position: Point) -> SelectionChange {
        let hits = self.hits(position);
        if hits.is_empty() {
            for shape in &mut self.shapes {
                shape.deselect();
            }
            log::debug!("pointer down at {position:?} hit nothing, selection cleared");
            return SelectionChange::Cleared;
        }

        for &index in &hits {
            let shape = &mut self.shapes[index];
            shape.select();
            log::debug!("selected {} #{index}", shape.kind());
        }
        SelectionChange::Added(hits)
    }

    /// Pointer release. Currently has no effect on the scene.
    pub fn pointer_up(&mut self, _position: Point) {}
}

impl FromIterator<Shape> for Scene {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self::from_shapes(iter)
    }
}
