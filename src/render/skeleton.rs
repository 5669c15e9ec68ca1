//! Skeleton renderer: keypoints plus the fixed topology onto a surface.

use serde::Serialize;

use super::surface::{Point, Surface};
use crate::models::{KeypointMap, KeypointName, RgbColor, SKELETON_EDGES};

/// Default bone stroke color
pub const DEFAULT_BONE_COLOR: RgbColor = RgbColor::new(0x00, 0xFF, 0x00);
/// Default bone stroke width in pixels
pub const DEFAULT_BONE_WIDTH: f64 = 2.0;
/// Default joint marker color
pub const DEFAULT_JOINT_COLOR: RgbColor = RgbColor::new(0xFF, 0x00, 0x00);
/// Default joint marker radius in pixels
pub const DEFAULT_JOINT_RADIUS: f64 = 4.0;

/// Stroke and fill styling for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Bone line color
    pub bone_color: RgbColor,
    /// Bone line width
    pub bone_width: f64,
    /// Joint marker color
    pub joint_color: RgbColor,
    /// Joint marker radius
    pub joint_radius: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            bone_color: DEFAULT_BONE_COLOR,
            bone_width: DEFAULT_BONE_WIDTH,
            joint_color: DEFAULT_JOINT_COLOR,
            joint_radius: DEFAULT_JOINT_RADIUS,
        }
    }
}

/// What a render actually drew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    /// Bones with both endpoints present
    pub edges_drawn: usize,
    /// Joints with both coordinates present
    pub points_drawn: usize,
}

/// Draws one frame's skeleton: clear, then bones, then joints.
///
/// Coordinates are used as surface pixels without any transform. Keypoints
/// missing a coordinate are skipped, along with every bone touching them.
pub fn render_skeleton<S: Surface + ?Sized>(
    surface: &mut S,
    keypoints: &KeypointMap,
    style: &RenderStyle,
) -> RenderSummary {
    surface.clear();
    let mut summary = RenderSummary::default();

    let position = |name: &KeypointName| {
        keypoints
            .get(name)
            .and_then(|kp| kp.position())
            .map(|(x, y)| Point::new(x, y))
    };

    for (a, b) in &SKELETON_EDGES {
        if let (Some(from), Some(to)) = (position(a), position(b)) {
            surface.stroke_line(from, to, style.bone_color, style.bone_width);
            summary.edges_drawn += 1;
        }
    }

    for (x, y) in keypoints.values().filter_map(|kp| kp.position()) {
        surface.fill_circle(Point::new(x, y), style.joint_radius, style.joint_color);
        summary.points_drawn += 1;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Keypoint;
    use crate::render::surface::{DrawCommand, RecordingSurface};

    fn full_body() -> KeypointMap {
        KeypointName::ALL
            .iter()
            .enumerate()
            .map(|(i, name)| (*name, Keypoint::at(i as f64 * 10.0, i as f64 * 5.0)))
            .collect()
    }

    #[test]
    fn test_full_body_draws_every_edge_and_point() {
        let mut surface = RecordingSurface::default();
        let summary = render_skeleton(&mut surface, &full_body(), &RenderStyle::default());

        assert_eq!(summary.edges_drawn, 16);
        assert_eq!(summary.points_drawn, 17);
        assert_eq!(surface.line_count(), 16);
        assert_eq!(surface.circle_count(), 17);
    }

    #[test]
    fn test_draw_order_is_clear_edges_points() {
        let mut surface = RecordingSurface::default();
        render_skeleton(&mut surface, &full_body(), &RenderStyle::default());
        let commands = surface.commands();

        assert_eq!(commands[0], DrawCommand::Clear);
        let first_circle = commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Circle { .. }))
            .unwrap();
        assert!(commands[1..first_circle]
            .iter()
            .all(|c| matches!(c, DrawCommand::Line { .. })));
        assert!(commands[first_circle..]
            .iter()
            .all(|c| matches!(c, DrawCommand::Circle { .. })));
    }

    #[test]
    fn test_x_only_keypoint_is_excluded_from_edges_and_points() {
        let mut keypoints = KeypointMap::new();
        keypoints.insert(KeypointName::LeftElbow, Keypoint::at(100.0, 100.0));
        keypoints.insert(
            KeypointName::LeftWrist,
            Keypoint {
                x: Some(120.0),
                y: None,
            },
        );

        let mut surface = RecordingSurface::default();
        let summary = render_skeleton(&mut surface, &keypoints, &RenderStyle::default());

        assert_eq!(summary.edges_drawn, 0);
        assert_eq!(summary.points_drawn, 1);
        assert_eq!(
            surface.commands()[1],
            DrawCommand::Circle {
                center: Point::new(100.0, 100.0),
                radius: DEFAULT_JOINT_RADIUS,
                color: DEFAULT_JOINT_COLOR,
            }
        );
    }

    #[test]
    fn test_empty_map_only_clears() {
        let mut surface = RecordingSurface::default();
        let summary = render_skeleton(&mut surface, &KeypointMap::new(), &RenderStyle::default());

        assert_eq!(summary, RenderSummary::default());
        assert_eq!(surface.commands(), &[DrawCommand::Clear]);
    }

    #[test]
    fn test_style_is_applied() {
        let style = RenderStyle {
            bone_color: RgbColor::new(1, 2, 3),
            bone_width: 5.0,
            ..RenderStyle::default()
        };
        let mut keypoints = KeypointMap::new();
        keypoints.insert(KeypointName::LeftHip, Keypoint::at(0.0, 0.0));
        keypoints.insert(KeypointName::RightHip, Keypoint::at(10.0, 0.0));

        let mut surface = RecordingSurface::default();
        render_skeleton(&mut surface, &keypoints, &style);

        assert!(matches!(
            surface.commands()[1],
            DrawCommand::Line { color, width, .. } if color == RgbColor::new(1, 2, 3) && (width - 5.0).abs() < f64::EPSILON
        ));
    }
}
