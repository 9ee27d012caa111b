use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::modes::TranslationMode;

/// Maps key presses to UI actions
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Process a key event
    pub fn handle_key(&self, key: KeyEvent) -> InputAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => InputAction::Quit,
                KeyCode::Char('u') => InputAction::ClearInput,
                _ => InputAction::None,
            };
        }

        // Alt chords are terminal escape sequences, not text
        if key.modifiers.contains(KeyModifiers::ALT) {
            return InputAction::None;
        }

        match key.code {
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Esc => InputAction::Quit,
            KeyCode::Tab => InputAction::NextMode,
            KeyCode::BackTab => InputAction::PrevMode,
            KeyCode::F(n @ 1..=4) => InputAction::SelectMode(TranslationMode::ALL[n as usize - 1]),
            KeyCode::Char(c) => InputAction::Insert(c),
            KeyCode::Backspace => InputAction::Delete,
            _ => InputAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Submit,
    Quit,
    Insert(char),
    Delete,
    ClearInput,
    NextMode,
    PrevMode,
    SelectMode(TranslationMode),
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_submit() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(press(KeyCode::Char('k'))), InputAction::Insert('k'));
        assert_eq!(
            handler.handle_key(KeyEvent::new(KeyCode::Char('K'), KeyModifiers::SHIFT)),
            InputAction::Insert('K')
        );
        assert_eq!(handler.handle_key(press(KeyCode::Backspace)), InputAction::Delete);
        assert_eq!(handler.handle_key(press(KeyCode::Enter)), InputAction::Submit);
    }

    #[test]
    fn test_mode_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(press(KeyCode::Tab)), InputAction::NextMode);
        assert_eq!(handler.handle_key(press(KeyCode::BackTab)), InputAction::PrevMode);
        assert_eq!(
            handler.handle_key(press(KeyCode::F(1))),
            InputAction::SelectMode(TranslationMode::Honest)
        );
        assert_eq!(
            handler.handle_key(press(KeyCode::F(4))),
            InputAction::SelectMode(TranslationMode::Chaotic)
        );
        assert_eq!(handler.handle_key(press(KeyCode::F(5))), InputAction::None);
    }

    #[test]
    fn test_control_keys() {
        let handler = InputHandler::new();
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key(ctrl('c')), InputAction::Quit);
        assert_eq!(handler.handle_key(ctrl('u')), InputAction::ClearInput);
        assert_eq!(handler.handle_key(ctrl('x')), InputAction::None);
        assert_eq!(handler.handle_key(press(KeyCode::Esc)), InputAction::Quit);
    }

    #[test]
    fn test_alt_chords_do_not_type() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT)),
            InputAction::None
        );
        assert_eq!(
            handler.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)),
            InputAction::None
        );
    }
}
