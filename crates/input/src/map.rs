//! Key mapping from terminal events to toolbar actions.
//!
//! Tiles are only moved with the mouse; keys cover the four buttons.

use crate::types::PuzzleAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to toolbar actions.
pub fn handle_key_event(key: KeyEvent) -> Option<PuzzleAction> {
    match key.code {
        KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Char('o') | KeyCode::Char('O') => {
            Some(PuzzleAction::Upload)
        }
        KeyCode::Char('s') | KeyCode::Char('S') => Some(PuzzleAction::Shuffle),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PuzzleAction::Reset),
        KeyCode::Char('v') | KeyCode::Char('V') | KeyCode::Tab => Some(PuzzleAction::ToggleReview),
        _ => None,
    }
}

/// Check if key should quit the app.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_toolbar_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('u'))),
            Some(PuzzleAction::Upload)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(PuzzleAction::Shuffle)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(PuzzleAction::Reset)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Tab)),
            Some(PuzzleAction::ToggleReview)
        );
    }

    #[test]
    fn test_arrow_keys_do_not_move_tiles() {
        for code in [KeyCode::Left, KeyCode::Right, KeyCode::Up, KeyCode::Down] {
            assert_eq!(handle_key_event(KeyEvent::from(code)), None);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
