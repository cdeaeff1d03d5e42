//! Upload prompt: a one-line path editor standing in for a file picker.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Result of feeding a key to the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Still editing.
    Editing,
    /// Enter pressed with this (trimmed, non-empty) path.
    Submit(String),
    /// Esc pressed, or Enter on an empty line.
    Cancel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathPrompt {
    text: String,
}

impl PathPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptOutcome {
        match key.code {
            KeyCode::Enter => {
                let path = self.text.trim();
                if path.is_empty() {
                    PromptOutcome::Cancel
                } else {
                    PromptOutcome::Submit(path.to_string())
                }
            }
            KeyCode::Esc => PromptOutcome::Cancel,
            KeyCode::Backspace => {
                self.text.pop();
                PromptOutcome::Editing
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.text.clear();
                PromptOutcome::Editing
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.text.push(ch);
                PromptOutcome::Editing
            }
            _ => PromptOutcome::Editing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(p: &mut PathPrompt, s: &str) {
        for ch in s.chars() {
            assert_eq!(p.handle_key(KeyEvent::from(KeyCode::Char(ch))), PromptOutcome::Editing);
        }
    }

    #[test]
    fn submit_trims_path() {
        let mut p = PathPrompt::new();
        type_str(&mut p, " cat.png ");
        assert_eq!(
            p.handle_key(KeyEvent::from(KeyCode::Enter)),
            PromptOutcome::Submit("cat.png".to_string())
        );
    }

    #[test]
    fn backspace_and_clear() {
        let mut p = PathPrompt::new();
        type_str(&mut p, "dog.jpgx");
        p.handle_key(KeyEvent::from(KeyCode::Backspace));
        assert_eq!(p.text(), "dog.jpg");

        p.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(p.text(), "");
    }

    #[test]
    fn empty_or_escape_cancels() {
        let mut p = PathPrompt::new();
        assert_eq!(p.handle_key(KeyEvent::from(KeyCode::Enter)), PromptOutcome::Cancel);
        type_str(&mut p, "a");
        assert_eq!(p.handle_key(KeyEvent::from(KeyCode::Esc)), PromptOutcome::Cancel);
    }
}
