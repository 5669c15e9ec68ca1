//! Single-line text prompt.
//!
//! Used for the jump-to-time, go-to-frame, custom flag and open-file
//! prompts. Input is validated for the prompt's purpose before it is
//! handed back to the caller.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::path::PathBuf;

use crate::services::parse_time_target;
use crate::tui::{centered_rect, Component, Theme};

/// What the prompt collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    /// Target time in seconds
    JumpToTime,
    /// Frame index
    GoToFrame,
    /// Custom flag label
    FlagLabel,
    /// Path of a CSV file to open
    OpenFile,
}

impl PromptPurpose {
    const fn title(self) -> &'static str {
        match self {
            Self::JumpToTime => "Jump to Time",
            Self::GoToFrame => "Go to Frame",
            Self::FlagLabel => "Flag Frame",
            Self::OpenFile => "Open CSV File",
        }
    }

    const fn field(self) -> &'static str {
        match self {
            Self::JumpToTime => " Seconds ",
            Self::GoToFrame => " Index ",
            Self::FlagLabel => " Label ",
            Self::OpenFile => " Path ",
        }
    }

    const fn hint(self) -> &'static str {
        match self {
            Self::JumpToTime => "First frame at or after this time is selected",
            Self::GoToFrame => "Indices past the last frame select the last frame",
            Self::FlagLabel => "Replaces any flag already on this frame",
            Self::OpenFile => "Flags of the current file are discarded",
        }
    }
}

/// Validated prompt input.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptValue {
    /// Target time in seconds
    Time(f64),
    /// Frame index
    Index(usize),
    /// Flag label
    Label(String),
    /// File path
    Path(PathBuf),
}

/// Events emitted by the text prompt
#[derive(Debug, Clone, PartialEq)]
pub enum TextPromptEvent {
    /// User confirmed valid input
    Submitted(PromptValue),
    /// User cancelled the prompt
    Cancelled,
}

/// Text prompt component state
#[derive(Debug, Clone)]
pub struct TextPrompt {
    purpose: PromptPurpose,
    input: String,
    error: Option<String>,
}

impl TextPrompt {
    /// Creates an empty prompt.
    #[must_use]
    pub const fn new(purpose: PromptPurpose) -> Self {
        Self {
            purpose,
            input: String::new(),
            error: None,
        }
    }

    /// Creates a prompt with pre-filled input.
    #[must_use]
    pub fn with_input(purpose: PromptPurpose, input: impl Into<String>) -> Self {
        Self {
            purpose,
            input: input.into(),
            error: None,
        }
    }

    /// What this prompt collects.
    #[must_use]
    pub const fn purpose(&self) -> PromptPurpose {
        self.purpose
    }

    /// Current input buffer.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Validation message from the last submit attempt.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn validate(&self) -> Result<PromptValue, String> {
        let text = self.input.trim();
        if text.is_empty() {
            return Err("Input cannot be empty".to_string());
        }

        match self.purpose {
            PromptPurpose::JumpToTime => parse_time_target(text)
                .map(PromptValue::Time)
                .ok_or_else(|| format!("'{text}' is not a number of seconds")),
            PromptPurpose::GoToFrame => text
                .parse::<usize>()
                .map(PromptValue::Index)
                .map_err(|_| format!("'{text}' is not a frame index")),
            // Labels are free-form; only surrounding whitespace is dropped
            PromptPurpose::FlagLabel => Ok(PromptValue::Label(text.to_string())),
            PromptPurpose::OpenFile => Ok(PromptValue::Path(PathBuf::from(text))),
        }
    }
}

impl Component for TextPrompt {
    type Event = TextPromptEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.input.push(c);
                self.error = None;
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
            }
            KeyCode::Enter => match self.validate() {
                Ok(value) => return Some(TextPromptEvent::Submitted(value)),
                Err(e) => self.error = Some(e),
            },
            KeyCode::Esc => return Some(TextPromptEvent::Cancelled),
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(60, 40, area);

        frame.render_widget(Clear, dialog_area);
        let background = Block::default().style(Style::default().bg(theme.background));
        frame.render_widget(background, dialog_area);

        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Input field
                Constraint::Length(3), // Hint
                Constraint::Min(2),    // Error message (if any)
                Constraint::Length(2), // Help text
            ])
            .split(dialog_area);

        let title = Paragraph::new(self.purpose.title())
            .style(
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(title, chunks[0]);

        let input = Paragraph::new(format!("{}█", self.input))
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.purpose.field())
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(input, chunks[1]);

        let hint = Paragraph::new(self.purpose.hint())
            .style(Style::default().fg(theme.text_muted))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            );
        frame.render_widget(hint, chunks[2]);

        if let Some(ref error) = self.error {
            let error_widget = Paragraph::new(error.as_str())
                .style(Style::default().fg(theme.error))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Error ")
                        .style(Style::default().bg(theme.background)),
                )
                .wrap(Wrap { trim: true });
            frame.render_widget(error_widget, chunks[3]);
        }

        let help = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Confirm  "),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Cancel"),
        ])])
        .style(Style::default().fg(theme.text).bg(theme.background));
        frame.render_widget(help, chunks[4]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(prompt: &mut TextPrompt, text: &str) {
        for c in text.chars() {
            assert_eq!(
                prompt.handle_input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
                None
            );
        }
    }

    fn enter(prompt: &mut TextPrompt) -> Option<TextPromptEvent> {
        prompt.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    #[test]
    fn test_time_prompt_submits_seconds() {
        let mut prompt = TextPrompt::new(PromptPurpose::JumpToTime);
        type_text(&mut prompt, "1.25");
        assert_eq!(
            enter(&mut prompt),
            Some(TextPromptEvent::Submitted(PromptValue::Time(1.25)))
        );
    }

    #[test]
    fn test_non_numeric_time_stays_open_with_error() {
        let mut prompt = TextPrompt::new(PromptPurpose::JumpToTime);
        type_text(&mut prompt, "soon");
        assert_eq!(enter(&mut prompt), None);
        assert!(prompt.error().is_some());

        // Editing clears the message
        prompt.handle_input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert!(prompt.error().is_none());
        assert_eq!(prompt.input(), "soo");
    }

    #[test]
    fn test_frame_prompt_rejects_negative_index() {
        let mut prompt = TextPrompt::new(PromptPurpose::GoToFrame);
        type_text(&mut prompt, "-3");
        assert_eq!(enter(&mut prompt), None);

        let mut prompt = TextPrompt::new(PromptPurpose::GoToFrame);
        type_text(&mut prompt, "42");
        assert_eq!(
            enter(&mut prompt),
            Some(TextPromptEvent::Submitted(PromptValue::Index(42)))
        );
    }

    #[test]
    fn test_label_is_trimmed() {
        let mut prompt = TextPrompt::new(PromptPurpose::FlagLabel);
        type_text(&mut prompt, "  T-peak ");
        assert_eq!(
            enter(&mut prompt),
            Some(TextPromptEvent::Submitted(PromptValue::Label(
                "T-peak".to_string()
            )))
        );
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let mut prompt = TextPrompt::new(PromptPurpose::FlagLabel);
        type_text(&mut prompt, "   ");
        assert_eq!(enter(&mut prompt), None);
        assert_eq!(prompt.error(), Some("Input cannot be empty"));
    }

    #[test]
    fn test_prefilled_path_and_escape() {
        let mut prompt = TextPrompt::with_input(PromptPurpose::OpenFile, "data/run1.csv");
        assert_eq!(
            enter(&mut prompt),
            Some(TextPromptEvent::Submitted(PromptValue::Path(PathBuf::from(
                "data/run1.csv"
            ))))
        );
        assert_eq!(
            prompt.handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(TextPromptEvent::Cancelled)
        );
    }
}
