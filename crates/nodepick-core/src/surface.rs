//! Drawing surface abstraction.
//!
//! The surface is an immediate-mode 2D canvas: style setters followed by
//! paint calls. Implementations can target Vello, a test recorder, or any
//! other backend.

use crate::style::SerializableColor;
use kurbo::{Point, Rect, Size};
use peniko::Color;
use thiserror::Error;

/// Surface errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("surface has been detached from its view")]
    Detached,
    #[error("surface backend error: {0}")]
    Backend(String),
}

/// Minimal 2D canvas used by shapes and the redraw loop.
pub trait Surface {
    /// Size of the drawable area.
    fn size(&self) -> Size;

    /// Erase everything inside `rect`.
    fn clear(&mut self, rect: Rect) -> Result<(), SurfaceError>;

    fn set_fill_color(&mut self, color: Color) -> Result<(), SurfaceError>;

    fn set_stroke_color(&mut self, color: Color) -> Result<(), SurfaceError>;

    fn set_line_width(&mut self, width: f64) -> Result<(), SurfaceError>;

    /// Fill a circle with the current fill color.
    fn fill_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError>;

    /// Fill a rectangle with the current fill color.
    fn fill_rect(&mut self, rect: Rect) -> Result<(), SurfaceError>;

    /// Stroke a straight line with the current stroke color and line width.
    fn stroke_line(&mut self, from: Point, to: Point) -> Result<(), SurfaceError>;
}

/// A paint operation captured by [`RecordingSurface`], with its resolved style.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    FillCircle {
        center: Point,
        radius: f64,
        color: SerializableColor,
    },
    FillRect {
        rect: Rect,
        color: SerializableColor,
    },
    StrokeLine {
        from: Point,
        to: Point,
        width: f64,
        color: SerializableColor,
    },
}

/// Surface that records draw calls instead of rasterising them.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    fill: SerializableColor,
    stroke: SerializableColor,
    line_width: f64,
    commands: Vec<DrawCommand>,
    detached: bool,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            fill: SerializableColor::black(),
            stroke: SerializableColor::black(),
            line_width: 1.0,
            commands: Vec::new(),
            detached: false,
        }
    }

    /// Commands recorded so far, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Simulate the hosting view going away. Every later call fails.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    fn check(&self) -> Result<(), SurfaceError> {
        if self.detached {
            Err(SurfaceError::Detached)
        } else {
            Ok(())
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        self.check()?;
        self.commands.push(DrawCommand::Clear(rect));
        Ok(())
    }

    fn set_fill_color(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.check()?;
        self.fill = color.into();
        Ok(())
    }

    fn set_stroke_color(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.check()?;
        self.stroke = color.into();
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> Result<(), SurfaceError> {
        self.check()?;
        self.line_width = width;
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64) -> Result<(), SurfaceError> {
        self.check()?;
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color: self.fill,
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        self.check()?;
        self.commands.push(DrawCommand::FillRect {
            rect,
            color: self.fill,
        });
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point) -> Result<(), SurfaceError> {
        self.check()?;
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            width: self.line_width,
            color: self.stroke,
        });
        Ok(())
    }
}
