//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod component;
pub mod frame_panel;
pub mod handlers;
pub mod help_overlay;
pub mod skeleton_view;
pub mod status_bar;
pub mod text_prompt;
pub mod theme;
pub mod timeline;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::services::{MotionFileService, Session};

// Re-export TUI components
pub use component::Component;
pub use frame_panel::FramePanel;
pub use help_overlay::{HelpOverlay, HelpOverlayEvent};
pub use skeleton_view::{CanvasSurface, SkeletonView};
pub use status_bar::StatusBar;
pub use text_prompt::{PromptPurpose, PromptValue, TextPrompt, TextPromptEvent};
pub use theme::Theme;
pub use timeline::Timeline;

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Help overlay popup
    HelpOverlay,
    /// Text prompt (time, frame index, flag label, or file path)
    TextPrompt,
    /// Quit confirmation while flags are unexported
    UnexportedFlagsPrompt,
}

/// Active component - holds the currently active popup component
///
/// Only one component can be active at a time.
#[derive(Debug)]
pub enum ActiveComponent {
    /// Help overlay component
    HelpOverlay(HelpOverlay),
    /// Text prompt component
    TextPrompt(TextPrompt),
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Loaded frames, position, and flags
    pub session: Session,
    /// Path of the loaded CSV file
    pub source_path: Option<PathBuf>,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Currently active component (if any)
    pub active_component: Option<ActiveComponent>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // System resources
    /// Application configuration
    pub config: Config,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state with an empty session.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut state = Self {
            session: Session::new(),
            source_path: None,
            theme: Theme::from_mode(config.ui.theme_mode),
            active_popup: None,
            active_component: None,
            status_message: "Press ? for help".to_string(),
            error_message: None,
            config,
            should_quit: false,
        };
        if state.config.ui.show_help_on_startup {
            state.open_help_overlay();
        }
        state
    }

    /// Loads a CSV file, replacing the session only on success.
    ///
    /// Failures are shown in the error overlay. Returns true on success.
    pub fn load_file(&mut self, path: &Path) -> bool {
        let unit = self.config.timestamps.numeric_unit;
        match MotionFileService::load_into(&mut self.session, path, unit) {
            Ok(report) => {
                self.source_path = Some(path.to_path_buf());
                let mut message = format!(
                    "Loaded {} frames from {} ({:.3}s)",
                    report.frames, report.source, report.duration
                );
                let dropped = report.discarded + report.unreadable + report.unparsed_timestamps;
                if dropped > 0 {
                    message.push_str(&format!(", {dropped} rows skipped"));
                }
                self.set_status(message);
                true
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "load failed");
                self.set_error(format!("Failed to load {}:\n{e}", path.display()));
                false
            }
        }
    }

    /// Writes the annotated CSV to the configured export path.
    ///
    /// Returns true when a file was written.
    pub fn export_flags(&mut self) -> bool {
        let path = self.config.export_path();
        let text = match self.session.export_csv() {
            Ok(Some(text)) => text,
            Ok(None) => {
                self.set_status("Nothing to export: no frames loaded");
                return false;
            }
            Err(e) => {
                self.set_error(format!("Export failed:\n{e}"));
                return false;
            }
        };

        match MotionFileService::write_output(&path, &text) {
            Ok(()) => {
                self.session.mark_exported();
                info!(path = %path.display(), flags = self.session.annotations().len(), "exported flags");
                self.set_status(format!(
                    "Exported {} frames ({} flags) to {}",
                    self.session.frames().len(),
                    self.session.annotations().len(),
                    path.display()
                ));
                true
            }
            Err(e) => {
                self.set_error(format!("Export failed:\n{e}"));
                false
            }
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Open the help overlay component
    pub fn open_help_overlay(&mut self) {
        self.active_component = Some(ActiveComponent::HelpOverlay(HelpOverlay::new()));
        self.active_popup = Some(PopupType::HelpOverlay);
    }

    /// Open a text prompt for `purpose`
    pub fn open_prompt(&mut self, prompt: TextPrompt) {
        self.active_component = Some(ActiveComponent::TextPrompt(prompt));
        self.active_popup = Some(PopupType::TextPrompt);
    }

    /// Close the currently active component
    pub fn close_component(&mut self) {
        self.active_component = None;
        self.active_popup = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS, Dark/Light are explicit)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            // Resize needs no handling, the next draw picks up the new size
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Timeline
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    Timeline::render(f, chunks[2], state);
    StatusBar::render(f, chunks[3], state, &state.theme);

    if let Some(popup_type) = &state.active_popup {
        render_popup(f, *popup_type, state);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Title text: file, frame position, time, and flag.
fn title_text(state: &AppState) -> String {
    let frames = state.session.frames();
    let source = frames.source_name().unwrap_or("no file");
    let dirty_indicator = if state.session.is_dirty() { " *" } else { "" };

    let Some(frame) = state.session.current_frame() else {
        return format!(" {APP_NAME} - {source}{dirty_indicator}");
    };

    let flag = state.session.current_flag().unwrap_or("-");
    format!(
        " {APP_NAME} - {source}{dirty_indicator} | Frame {} / {} | t = {:.3}s | Flag: {flag}",
        state.session.current_index(),
        frames.len().saturating_sub(1),
        frame.relative_time,
    )
}

/// Render title bar with file name and dirty indicator
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title_widget = Paragraph::new(title_text(state))
        .style(
            Style::default()
                .fg(state.theme.primary)
                .bg(state.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(state.theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render main content (skeleton canvas beside the frame panel)
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    SkeletonView::render(f, chunks[0], state);
    FramePanel::render(f, chunks[1], state);
}

/// Render active popup
fn render_popup(f: &mut Frame, popup_type: PopupType, state: &AppState) {
    let area = f.area();
    match (popup_type, &state.active_component) {
        (PopupType::HelpOverlay, Some(ActiveComponent::HelpOverlay(help))) => {
            help.render(f, area, &state.theme);
        }
        (PopupType::TextPrompt, Some(ActiveComponent::TextPrompt(prompt))) => {
            prompt.render(f, area, &state.theme);
        }
        (PopupType::UnexportedFlagsPrompt, _) => {
            render_unexported_prompt(f, state.session.annotations().len(), &state.theme);
        }
        _ => {}
    }
}

/// Render the quit confirmation shown while flags are unexported
fn render_unexported_prompt(f: &mut Frame, flag_count: usize, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let text = vec![
        Line::from(""),
        Line::from(format!("{flag_count} flag(s) have not been exported.")),
        Line::from(""),
        Line::from("  [E] Export and quit"),
        Line::from("  [Q] Quit without exporting"),
        Line::from("  [Esc] Cancel"),
    ];

    let prompt = Paragraph::new(text).block(
        Block::default()
            .title(" Unexported Flags ")
            .borders(Borders::ALL)
            .style(Style::default().fg(theme.warning)),
    );

    f.render_widget(prompt, area);
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());

    f.render_widget(Clear, area);

    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Error message
            Constraint::Length(3), // Help text
        ])
        .split(area);

    let title = Paragraph::new("ERROR")
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(theme.error).bg(theme.background)),
        );
    f.render_widget(title, chunks[0]);

    let error_text = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details ")
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, chunks[1]);

    let help = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ])])
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[2]);
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    // Route to popup handler if popup is active
    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    handlers::handle_main_input(state, key)
}
