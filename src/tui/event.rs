//! Keyboard mapping for the terminal form

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Key action derived from key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Move focus to the next control
    NextField,
    /// Move focus to the previous control
    PrevField,
    /// Step the focused control up (next option for choices)
    Increase,
    /// Step the focused control down (previous option for choices)
    Decrease,
    /// Type into the focused numeric control
    Input(char),
    /// Delete the last typed character
    Backspace,
    /// Press "Prediksi Risiko"
    Submit,
    /// Drop the pending text entry (quits when nothing is pending)
    Cancel,
    /// Restore every control to its default
    Reset,
    /// Toggle help overlay
    Help,
    /// No action
    None,
}

impl From<KeyEvent> for KeyAction {
    fn from(key: KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return KeyAction::None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Esc => KeyAction::Cancel,
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => KeyAction::NextField,
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => KeyAction::PrevField,
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('l') => KeyAction::Increase,
            KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => KeyAction::Decrease,
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == ',' => KeyAction::Input(c),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Char('r') => KeyAction::Reset,
            KeyCode::Char('?') => KeyAction::Help,
            _ => KeyAction::None,
        }
    }
}
