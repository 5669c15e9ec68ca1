//! Drawing surface abstraction and a recording implementation.

use serde::Serialize;

use crate::constants::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::models::RgbColor;

/// A point in surface pixels. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal pixel coordinate
    pub x: f64,
    /// Vertical pixel coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 2D target the skeleton renderer draws on.
pub trait Surface {
    /// Logical `(width, height)` in pixels.
    fn size(&self) -> (f64, f64);

    /// Erases everything drawn so far.
    fn clear(&mut self);

    /// Strokes a straight line between two points.
    fn stroke_line(&mut self, from: Point, to: Point, color: RgbColor, width: f64);

    /// Fills a circle centered at `center`.
    fn fill_circle(&mut self, center: Point, radius: f64, color: RgbColor);
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Surface was cleared
    Clear,
    /// Line stroke
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke color
        color: RgbColor,
        /// Stroke width in pixels
        width: f64,
    },
    /// Filled circle
    Circle {
        /// Circle center
        center: Point,
        /// Radius in pixels
        radius: f64,
        /// Fill color
        color: RgbColor,
    },
}

/// Surface that records commands instead of drawing them.
///
/// Clearing drops earlier commands, so the record always describes what a
/// real surface would currently show.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Creates a recording surface of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Recorded commands in draw order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded line strokes.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Number of recorded filled circles.
    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(SURFACE_WIDTH, SURFACE_HEIGHT)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: RgbColor, width: f64) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: RgbColor) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}
