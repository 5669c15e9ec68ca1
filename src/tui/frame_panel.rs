//! Frame field panel: the current frame as pretty JSON, plus the flag list.

use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::{AnnotationMap, Frame as MotionFrame};
use crate::tui::{AppState, Theme};

/// Most flag rows shown before the list is cut short.
const MAX_FLAG_ROWS: usize = 6;

/// Pretty-printed JSON of a frame's fields, in column order.
#[must_use]
pub fn frame_json(frame: &MotionFrame) -> String {
    serde_json::to_string_pretty(&frame.fields)
        .unwrap_or_else(|e| format!("<cannot display frame: {e}>"))
}

fn flag_lines(annotations: &AnnotationMap, current: usize, theme: &Theme) -> Vec<Line<'static>> {
    if annotations.is_empty() {
        return vec![Line::from(Span::styled(
            "No flags",
            Style::default().fg(theme.text_muted),
        ))];
    }

    let mut lines: Vec<Line<'static>> = annotations
        .iter()
        .take(MAX_FLAG_ROWS)
        .map(|(index, label)| {
            let style = if index == current {
                Style::default().fg(theme.flag).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            Line::from(vec![
                Span::styled(format!("{index:>6}  "), Style::default().fg(theme.accent)),
                Span::styled(label.to_string(), style),
            ])
        })
        .collect();

    let hidden = annotations.len().saturating_sub(MAX_FLAG_ROWS);
    if hidden > 0 {
        lines.push(Line::from(Span::styled(
            format!("… {hidden} more"),
            Style::default().fg(theme.text_muted),
        )));
    }
    lines
}

/// Frame panel widget
pub struct FramePanel;

impl FramePanel {
    /// Render fields of the current frame above the list of flags.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let annotations = state.session.annotations();
        let flag_rows = annotations.len().clamp(1, MAX_FLAG_ROWS + 1) as u16;

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(flag_rows + 2)])
            .split(area);

        let body = state
            .session
            .current_frame()
            .map_or_else(|| "{}".to_string(), frame_json);

        let fields = Paragraph::new(body)
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Frame ")
                    .border_style(Style::default().fg(theme.primary)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(fields, chunks[0]);

        let flags = Paragraph::new(flag_lines(annotations, state.session.current_index(), theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Flags ({}) ", annotations.len()))
                    .border_style(Style::default().fg(theme.primary)),
            );
        f.render_widget(flags, chunks[1]);
    }
}
