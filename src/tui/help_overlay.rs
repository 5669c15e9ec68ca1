//! Help overlay listing every shortcut, grouped by category.
//!
//! Content is generated from [`Action::ALL`] and the shortcut registry, so
//! it always matches the key handling.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

use crate::shortcuts::{Action, ShortcutRegistry};
use crate::tui::{Component, Theme};

/// Width of the key column.
const KEY_COLUMN: usize = 18;

/// Events emitted by the help overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpOverlayEvent {
    /// User closed the overlay
    Closed,
}

/// Section heading an action is listed under.
const fn section_of(action: Action) -> &'static str {
    match action {
        Action::PreviousFrame
        | Action::NextFrame
        | Action::StepBack
        | Action::StepForward
        | Action::JumpToFirst
        | Action::JumpToLast
        | Action::JumpToTime
        | Action::GoToFrame => "NAVIGATION",
        Action::FlagTCue | Action::FlagFirstMovement | Action::FlagCustom | Action::ClearFlag => {
            "FLAGS"
        }
        Action::OpenFile | Action::Export | Action::Quit => "FILE OPERATIONS",
        Action::ToggleHelp | Action::Cancel => "SYSTEM",
    }
}

/// Scrollable help overlay component.
#[derive(Debug, Clone)]
pub struct HelpOverlay {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    /// Total number of content lines
    total_lines: usize,
}

impl HelpOverlay {
    /// Creates a new help overlay scrolled to the top.
    #[must_use]
    pub fn new() -> Self {
        let total_lines = Self::get_help_content(&Theme::dark()).len();
        Self {
            scroll_offset: 0,
            total_lines,
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Build help content from the registry.
    fn get_help_content(theme: &Theme) -> Vec<Line<'static>> {
        let registry = ShortcutRegistry::new();
        let mut lines = vec![
            Line::from(Span::styled(
                "LazyMotion - Help",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        let mut current_section = "";
        for action in Action::ALL {
            let section = section_of(action);
            if section != current_section {
                if !current_section.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(
                    format!("═══ {section} ═══"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )));
                current_section = section;
            }

            let keys = registry.keys_label("main", action);
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{keys:<width$}", width = KEY_COLUMN),
                    Style::default().fg(theme.success),
                ),
                Span::styled(action.description(), Style::default().fg(theme.text)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(theme.text_muted),
        )));
        lines
    }

    /// Number of content lines.
    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }
}

impl Default for HelpOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpOverlay {
    type Event = HelpOverlayEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => return Some(HelpOverlayEvent::Closed),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Home => self.scroll_offset = 0,
            KeyCode::End => self.scroll_offset = self.total_lines.saturating_sub(1),
            _ => {}
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // Centered modal, 60% width and 80% height
        let width = (area.width * 60) / 100;
        let height = (area.height * 80) / 100;
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;

        let modal_area = Rect {
            x: x + area.x,
            y: y + area.y,
            width,
            height,
        };
        frame.render_widget(Clear, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal_area);

        let content_area = chunks[0];
        let scrollbar_area = chunks[1];

        let content = Self::get_help_content(theme);
        let visible_height = content_area.height.saturating_sub(2) as usize; // Account for borders
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, content_area);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.primary));

        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
                .position(self.scroll_offset);

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}
