//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the application.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Step one frame back
    PreviousFrame,
    /// Step one frame forward
    NextFrame,
    /// Step ten frames back
    StepBack,
    /// Step ten frames forward
    StepForward,
    /// Go to the first frame
    JumpToFirst,
    /// Go to the last frame
    JumpToLast,
    /// Prompt for a time and jump to it
    JumpToTime,
    /// Prompt for a frame index and go to it
    GoToFrame,

    // === FLAGS ===
    /// Flag the current frame `T-cue`
    FlagTCue,
    /// Flag the current frame `T-first-movement`
    FlagFirstMovement,
    /// Prompt for a custom flag label
    FlagCustom,
    /// Remove the current frame's flag
    ClearFlag,

    // === FILE OPERATIONS ===
    /// Prompt for a CSV path and load it
    OpenFile,
    /// Write the annotated CSV
    Export,
    /// Quit (asks first when flags are unexported)
    Quit,

    // === HELP ===
    /// Show or hide the help overlay
    ToggleHelp,

    // === GENERAL ===
    /// Dismiss the current message
    Cancel,
}

impl Action {
    /// Every action, in help display order.
    pub const ALL: [Self; 17] = [
        Self::PreviousFrame,
        Self::NextFrame,
        Self::StepBack,
        Self::StepForward,
        Self::JumpToFirst,
        Self::JumpToLast,
        Self::JumpToTime,
        Self::GoToFrame,
        Self::FlagTCue,
        Self::FlagFirstMovement,
        Self::FlagCustom,
        Self::ClearFlag,
        Self::OpenFile,
        Self::Export,
        Self::Quit,
        Self::ToggleHelp,
        Self::Cancel,
    ];

    /// Stable identifier for the action.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::PreviousFrame => "previous_frame",
            Self::NextFrame => "next_frame",
            Self::StepBack => "step_back",
            Self::StepForward => "step_forward",
            Self::JumpToFirst => "jump_first",
            Self::JumpToLast => "jump_last",
            Self::JumpToTime => "jump_to_time",
            Self::GoToFrame => "go_to_frame",
            Self::FlagTCue => "flag_t_cue",
            Self::FlagFirstMovement => "flag_first_movement",
            Self::FlagCustom => "flag_custom",
            Self::ClearFlag => "clear_flag",
            Self::OpenFile => "open_file",
            Self::Export => "export",
            Self::Quit => "quit",
            Self::ToggleHelp => "toggle_help",
            Self::Cancel => "cancel",
        }
    }

    /// One-line description shown in the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::PreviousFrame => "Previous frame",
            Self::NextFrame => "Next frame",
            Self::StepBack => "Back 10 frames",
            Self::StepForward => "Forward 10 frames",
            Self::JumpToFirst => "First frame",
            Self::JumpToLast => "Last frame",
            Self::JumpToTime => "Jump to time (seconds)",
            Self::GoToFrame => "Go to frame index",
            Self::FlagTCue => "Flag frame as T-cue",
            Self::FlagFirstMovement => "Flag frame as T-first-movement",
            Self::FlagCustom => "Flag frame with custom label",
            Self::ClearFlag => "Clear frame flag",
            Self::OpenFile => "Open CSV file",
            Self::Export => "Export annotated CSV",
            Self::Quit => "Quit",
            Self::ToggleHelp => "Toggle help",
            Self::Cancel => "Dismiss message",
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
    /// Bindings in registration order, for help display
    ordered: Vec<(String, KeyBinding, Action)>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a `KeyEvent`.
    ///
    /// Shift is dropped for punctuation, since terminals disagree on whether
    /// `?` or `:` arrive with it.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(c) if !c.is_ascii_alphabetic() => event.modifiers - KeyModifiers::SHIFT,
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// Human-readable label, e.g. `Ctrl+Q` or `PgUp`.
    #[must_use]
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Char(c) => c.to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", key.to_uppercase())
        } else {
            key
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            ordered: Vec::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "main";

        // === NAVIGATION ===
        self.register(ctx, K::Left, M::NONE, Action::PreviousFrame);
        self.register(ctx, K::Char('h'), M::NONE, Action::PreviousFrame);
        self.register(ctx, K::Right, M::NONE, Action::NextFrame);
        self.register(ctx, K::Char('l'), M::NONE, Action::NextFrame);
        self.register(ctx, K::PageUp, M::NONE, Action::StepBack);
        self.register(ctx, K::PageDown, M::NONE, Action::StepForward);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Char('g'), M::NONE, Action::JumpToTime);
        self.register(ctx, K::Char(':'), M::NONE, Action::GoToFrame);

        // === FLAGS ===
        self.register(ctx, K::Char('c'), M::NONE, Action::FlagTCue);
        self.register(ctx, K::Char('m'), M::NONE, Action::FlagFirstMovement);
        self.register(ctx, K::Char('f'), M::NONE, Action::FlagCustom);
        self.register(ctx, K::Char('x'), M::NONE, Action::ClearFlag);

        // === FILE OPERATIONS ===
        self.register(ctx, K::Char('o'), M::NONE, Action::OpenFile);
        self.register(ctx, K::Char('e'), M::NONE, Action::Export);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
        self.ordered.push((context.to_string(), binding, action));
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }

    /// Key labels bound to `action`, joined for display (e.g. `← / h`).
    #[must_use]
    pub fn keys_label(&self, context: &str, action: Action) -> String {
        self.ordered
            .iter()
            .filter(|(ctx, _, bound)| ctx == context && *bound == action)
            .map(|(_, binding, _)| binding.label())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
