//! Skeleton canvas panel.
//!
//! Adapts the renderer's [`Surface`] onto a ratatui canvas. The canvas
//! y-axis points up while surface pixels grow downward, so the adapter
//! flips y. Nothing else in the crate sees canvas coordinates.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Points},
        Block, Borders, Paragraph,
    },
    Frame,
};

use crate::constants::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::models::{KeypointMap, RgbColor};
use crate::render::{render_skeleton, Point, RenderStyle, Surface};
use crate::tui::{AppState, Theme};

/// [`Surface`] over one canvas paint pass.
///
/// Braille cells cannot show stroke width, so `width` only matters to
/// other surfaces. Filled circles are drawn as concentric outlines plus a
/// center dot so small joints stay visible at terminal resolution.
pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    width: f64,
    height: f64,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    /// Wraps a paint context whose bounds are `width` x `height`.
    pub fn new(ctx: &'a mut Context<'b>, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }

    /// Surface point to canvas coordinates.
    #[must_use]
    pub fn to_canvas(&self, point: Point) -> (f64, f64) {
        flip_y(point, self.height)
    }
}

fn flip_y(point: Point, height: f64) -> (f64, f64) {
    (point.x, height - point.y)
}

/// Upper bound on outlines per joint, whatever the radius.
const MAX_FILL_RINGS: usize = 16;

/// Outline radii for a filled circle, largest first, about a pixel apart.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn ring_radii(radius: f64) -> Vec<f64> {
    if !(radius.is_finite() && radius > 0.0) {
        return Vec::new();
    }
    let rings = radius.ceil().min(MAX_FILL_RINGS as f64) as usize;
    let step = radius / rings as f64;
    (0..rings).map(|i| radius - step * i as f64).collect()
}

impl Surface for CanvasSurface<'_, '_> {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        // A canvas starts blank on every paint pass
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: RgbColor, _width: f64) {
        let (x1, y1) = self.to_canvas(from);
        let (x2, y2) = self.to_canvas(to);
        self.ctx.draw(&CanvasLine {
            x1,
            y1,
            x2,
            y2,
            color: color.to_ratatui_color(),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: RgbColor) {
        let (x, y) = self.to_canvas(center);
        let color = color.to_ratatui_color();

        for r in ring_radii(radius) {
            self.ctx.draw(&Circle {
                x,
                y,
                radius: r,
                color,
            });
        }
        self.ctx.draw(&Points {
            coords: &[(x, y)],
            color,
        });
    }
}

/// Canvas widget for one frame's keypoints.
#[must_use]
pub fn skeleton_canvas<'a>(
    keypoints: &'a KeypointMap,
    style: RenderStyle,
    block: Block<'a>,
    theme: &Theme,
) -> Canvas<'a, impl Fn(&mut Context) + 'a> {
    Canvas::default()
        .block(block)
        .background_color(theme.surface)
        .marker(Marker::Braille)
        .x_bounds([0.0, SURFACE_WIDTH])
        .y_bounds([0.0, SURFACE_HEIGHT])
        .paint(move |ctx| {
            let mut surface = CanvasSurface::new(ctx, SURFACE_WIDTH, SURFACE_HEIGHT);
            render_skeleton(&mut surface, keypoints, &style);
        })
}

/// Skeleton panel widget
pub struct SkeletonView;

impl SkeletonView {
    /// Render the current frame's skeleton, or a placeholder with no frames.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        if !state.session.has_frames() {
            let placeholder = Paragraph::new("No frames loaded. Press o to open a CSV file.")
                .style(Style::default().fg(theme.text_muted))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Skeleton ")
                        .border_style(Style::default().fg(theme.primary)),
                );
            f.render_widget(placeholder, area);
            return;
        }

        let keypoints = state.session.current_keypoints();
        let present = keypoints.values().filter(|kp| kp.is_present()).count();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Skeleton ({present}/{} keypoints) ", keypoints.len()))
            .border_style(Style::default().fg(theme.primary));

        let canvas = skeleton_canvas(&keypoints, state.config.render.style(), block, theme);
        f.render_widget(canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Keypoint, KeypointName};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_flip_y_maps_top_left_to_canvas_top() {
        assert_eq!(flip_y(Point::new(0.0, 0.0), SURFACE_HEIGHT), (0.0, 480.0));
        assert_eq!(flip_y(Point::new(320.0, 480.0), SURFACE_HEIGHT), (320.0, 0.0));
        assert_eq!(flip_y(Point::new(10.0, 20.0), SURFACE_HEIGHT), (10.0, 460.0));
    }

    fn painted_cells(keypoints: &KeypointMap) -> usize {
        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        terminal
            .draw(|f| {
                let canvas =
                    skeleton_canvas(keypoints, RenderStyle::default(), Block::default(), &theme);
                f.render_widget(canvas, f.area());
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .filter(|cell| cell.symbol() != " ")
            .count()
    }

    #[test]
    fn test_ring_radii_step_one_pixel_for_small_joints() {
        assert_eq!(ring_radii(4.0), vec![4.0, 3.0, 2.0, 1.0]);
        assert_eq!(ring_radii(0.5), vec![0.5]);
        assert!(ring_radii(0.0).is_empty());
        assert!(ring_radii(f64::NAN).is_empty());
    }

    #[test]
    fn test_ring_radii_are_capped_for_huge_radius() {
        let radii = ring_radii(1e12);
        assert_eq!(radii.len(), MAX_FILL_RINGS);
        assert_eq!(radii[0], 1e12);
    }

    #[test]
    fn test_canvas_paints_present_keypoints() {
        let keypoints: KeypointMap = [
            (KeypointName::LeftShoulder, Keypoint::at(200.0, 150.0)),
            (KeypointName::RightShoulder, Keypoint::at(440.0, 150.0)),
        ]
        .into_iter()
        .collect();

        assert!(painted_cells(&keypoints) > 0);
    }

    #[test]
    fn test_canvas_stays_blank_without_complete_keypoints() {
        let keypoints: KeypointMap = [(
            KeypointName::Nose,
            Keypoint {
                x: Some(100.0),
                y: None,
            },
        )]
        .into_iter()
        .collect();

        assert_eq!(painted_cells(&keypoints), 0);
    }
}
