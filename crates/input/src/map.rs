//! Key mapping from terminal events to movement keys and turns.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a terminal key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// A held key of the core key set.
    Hold(Key),
    /// Turn left by one turn step per press/repeat.
    TurnLeft,
    /// Turn right by one turn step per press/repeat.
    TurnRight,
}

/// Map a key code to its binding.
pub fn map_key(code: KeyCode) -> Option<Binding> {
    match code {
        // Walking
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Binding::Hold(Key::Forward)),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            Some(Binding::Hold(Key::Backward))
        }
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Binding::Hold(Key::StrafeLeft)),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Binding::Hold(Key::StrafeRight)),

        // Turning without a mouse
        KeyCode::Left | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Binding::TurnLeft),
        KeyCode::Right | KeyCode::Char('e') | KeyCode::Char('E') => Some(Binding::TurnRight),

        KeyCode::Esc => Some(Binding::Hold(Key::Quit)),

        _ => None,
    }
}

/// Ctrl-C quits immediately; raw mode swallows the signal.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
