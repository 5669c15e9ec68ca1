//! Timeline slider: frame position as a gauge.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::tui::AppState;

/// Position of `index` in a sequence of `len` frames, in `0.0..=1.0`.
#[must_use]
pub fn progress_ratio(index: usize, len: usize) -> f64 {
    if len <= 1 {
        return 0.0;
    }
    (index as f64 / (len - 1) as f64).clamp(0.0, 1.0)
}

/// Timeline widget
pub struct Timeline;

impl Timeline {
    /// Render the slider for the current frame.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let frames = state.session.frames();
        let index = state.session.current_index();

        let label = state.session.current_frame().map_or_else(
            || "no frames".to_string(),
            |frame| {
                format!(
                    "{:.3}s / {:.3}s",
                    frame.relative_time,
                    frames.duration()
                )
            },
        );

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Timeline ")
                    .border_style(Style::default().fg(theme.primary)),
            )
            .gauge_style(
                Style::default()
                    .fg(theme.primary)
                    .bg(theme.background)
                    .add_modifier(Modifier::BOLD),
            )
            .ratio(progress_ratio(index, frames.len()))
            .label(label);

        f.render_widget(gauge, area);
    }
}
