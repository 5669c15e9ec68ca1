//! Standalone SVG output for recorded skeleton renders.

use std::fmt::Write;

use super::surface::{DrawCommand, RecordingSurface, Surface};

/// Converts a recorded surface into an SVG document.
///
/// Surface pixels map one-to-one onto SVG user units, both with `y` pointing down.
#[must_use]
pub fn to_svg(surface: &RecordingSurface) -> String {
    let (width, height) = surface.size();
    let mut svg = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );

    for command in surface.commands() {
        let _ = match command {
            DrawCommand::Clear => writeln!(
                svg,
                r#"  <rect x="0" y="0" width="{width}" height="{height}" fill="white"/>"#
            ),
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => writeln!(
                svg,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="{width}" stroke-linecap="round"/>"#,
                from.x, from.y, to.x, to.y
            ),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => writeln!(
                svg,
                r#"  <circle cx="{}" cy="{}" r="{radius}" fill="{color}"/>"#,
                center.x, center.y
            ),
        };
    }

    svg.push_str("</svg>\n");
    svg
}
