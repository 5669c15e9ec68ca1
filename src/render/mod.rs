//! Skeleton rendering onto abstract 2D surfaces.
//!
//! The renderer only knows the [`Surface`] trait. The terminal canvas adapter
//! lives with the UI; [`RecordingSurface`] backs tests and SVG output.

pub mod skeleton;
pub mod surface;
pub mod svg;

pub use skeleton::{
    render_skeleton, RenderStyle, RenderSummary, DEFAULT_BONE_COLOR, DEFAULT_BONE_WIDTH,
    DEFAULT_JOINT_COLOR, DEFAULT_JOINT_RADIUS,
};
pub use surface::{DrawCommand, Point, RecordingSurface, Surface};
pub use svg::to_svg;
