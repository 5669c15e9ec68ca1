//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::shortcuts::{Action, ShortcutRegistry};

use super::{AppState, PopupType, Theme};

/// Actions hinted on the main screen, in display order.
const MAIN_HINTS: [Action; 6] = [
    Action::NextFrame,
    Action::JumpToTime,
    Action::FlagTCue,
    Action::FlagFirstMovement,
    Action::Export,
    Action::ToggleHelp,
];

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message_line = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.clone()),
            ])
        } else if state.status_message.is_empty() {
            Line::from("")
        } else {
            Line::from(state.status_message.clone())
        };

        let status = Paragraph::new(vec![message_line, Self::get_contextual_help_line(state, theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// `(key, hint)` pairs for the current context.
    #[must_use]
    pub fn hints(state: &AppState) -> Vec<(String, String)> {
        let pairs: &[(&str, &str)] = match &state.active_popup {
            Some(PopupType::TextPrompt) => &[("Enter", "Confirm"), ("Esc", "Cancel")],
            Some(PopupType::HelpOverlay) => &[("↑/↓", "Scroll"), ("Esc", "Close")],
            Some(PopupType::UnexportedFlagsPrompt) => &[
                ("E", "Export and quit"),
                ("Q", "Quit without exporting"),
                ("Esc", "Cancel"),
            ],
            None => {
                let registry = ShortcutRegistry::new();
                return MAIN_HINTS
                    .iter()
                    .map(|action| {
                        (
                            registry.keys_label("main", *action),
                            action.description().to_string(),
                        )
                    })
                    .collect();
            }
        };

        pairs
            .iter()
            .map(|(key, hint)| ((*key).to_string(), (*hint).to_string()))
            .collect()
    }

    /// Get contextual help line (bottom help line)
    fn get_contextual_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));

        for (i, (key, action)) in Self::hints(state).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }

        Line::from(spans)
    }
}
