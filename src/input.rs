//! Input handling: key events to curve actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input action resulting from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `A`: raise the x frequency.
    IncreaseA,
    /// `a`: lower the x frequency.
    DecreaseA,
    /// `B`: raise the y frequency.
    IncreaseB,
    /// `b`: lower the y frequency.
    DecreaseB,
    /// `+`: advance the phase.
    IncreasePhase,
    /// `-`: retard the phase.
    DecreasePhase,
    /// `q`, `Q` or Ctrl+C.
    Quit,
    /// Unmapped key, or no key at all.
    None,
}

/// Maps keys to [`Action`]s. Letters are case-sensitive except for quit.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Handles a key event and returns the corresponding action.
    ///
    /// Release events are ignored so a key press applies exactly once on
    /// terminals that report both edges.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> Action {
        if event.kind == KeyEventKind::Release {
            return Action::None;
        }

        // Raw mode swallows SIGINT, so Ctrl+C has to quit here.
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('c' | 'C') => Action::Quit,
                _ => Action::None,
            };
        }

        match event.code {
            KeyCode::Char(c) => self.handle_char(c),
            _ => Action::None,
        }
    }

    /// Maps a typed character.
    #[must_use]
    pub fn handle_char(&self, c: char) -> Action {
        match c {
            'A' => Action::IncreaseA,
            'a' => Action::DecreaseA,
            'B' => Action::IncreaseB,
            'b' => Action::DecreaseB,
            '+' => Action::IncreasePhase,
            '-' => Action::DecreasePhase,
            'q' | 'Q' => Action::Quit,
            _ => Action::None,
        }
    }
}
