mod editor;
mod state;

use crossterm::event::KeyCode;

pub use editor::{Editor, EditorColumn};
pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppView {
    Timer,
    Help,
    Editor,
}

/// Hotkey intents, each mapping onto one timer operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    TogglePause,
    Next,
    Prev,
    AddTime,
    SubtractTime,
    ToggleMute,
    Edit,
    Help,
    Quit,
}

impl Intent {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        let intent = match key {
            KeyCode::Char(' ') => Intent::TogglePause,
            KeyCode::Char('n' | 'N') => Intent::Next,
            KeyCode::Char('p' | 'P') => Intent::Prev,
            KeyCode::Char('+' | '=') => Intent::AddTime,
            KeyCode::Char('-' | '_') => Intent::SubtractTime,
            KeyCode::Char('m' | 'M') => Intent::ToggleMute,
            KeyCode::Char('e' | 'E') => Intent::Edit,
            KeyCode::Char('?') => Intent::Help,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Intent::Quit,
            _ => return None,
        };
        Some(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            Intent::from_key(KeyCode::Char(' ')),
            Some(Intent::TogglePause)
        );
        assert_eq!(Intent::from_key(KeyCode::Char('N')), Some(Intent::Next));
        assert_eq!(Intent::from_key(KeyCode::Char('=')), Some(Intent::AddTime));
        assert_eq!(
            Intent::from_key(KeyCode::Char('_')),
            Some(Intent::SubtractTime)
        );
        assert_eq!(Intent::from_key(KeyCode::Esc), Some(Intent::Quit));
        assert_eq!(Intent::from_key(KeyCode::Char('x')), None);
        assert_eq!(Intent::from_key(KeyCode::Up), None);
    }
}
