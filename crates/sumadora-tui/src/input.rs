//! Keyboard input handling
//!
//! Maps raw crossterm key events onto the calculator's logical key
//! vocabulary. The glyph remapping itself (`/` showing as `÷` and so
//! on) lives in the core crate; this layer only decides which terminal
//! events become calculator keys and which control the application.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sumadora::prelude::Key;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward a calculator key to the display buffer
    Input(Key),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> Action {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Kitty-protocol and Windows terminals report key releases too;
        // only presses and repeats count as input.
        if kind == KeyEventKind::Release {
            return Action::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => Action::Quit,
                KeyCode::Char('u') => Action::Input(Key::Clear),
                _ => Action::None,
            };
        }

        match code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char(c) => Key::from_char(c).map_or(Action::None, Action::Input),
            KeyCode::Enter => Action::Input(Key::Submit),
            KeyCode::Backspace => Action::Input(Key::Backspace),
            KeyCode::Esc => Action::Input(Key::Clear),
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sumadora::prelude::Operation;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for (i, c) in ('0'..='9').enumerate() {
            let event = key_event(KeyCode::Char(c));
            assert_eq!(handler.handle_key(event), Action::Input(Key::Digit(i as u8)));
        }
    }

    #[test]
    fn test_handle_ascii_operator_keys() {
        let handler = InputHandler::new();
        let cases = [
            ('+', Operation::Add),
            ('-', Operation::Subtract),
            ('*', Operation::Multiply),
            ('/', Operation::Divide),
        ];
        for (c, op) in cases {
            let event = key_event(KeyCode::Char(c));
            assert_eq!(handler.handle_key(event), Action::Input(Key::Op(op)));
        }
    }

    #[test]
    fn test_handle_glyph_operator_keys() {
        // Some layouts type the glyphs directly
        let handler = InputHandler::new();
        let cases = [
            ('\u{00D7}', Operation::Multiply),
            ('\u{00F7}', Operation::Divide),
            ('\u{2212}', Operation::Subtract),
        ];
        for (c, op) in cases {
            let event = key_event(KeyCode::Char(c));
            assert_eq!(handler.handle_key(event), Action::Input(Key::Op(op)));
        }
    }

    #[test]
    fn test_handle_parentheses() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('('))),
            Action::Input(Key::LParen)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char(')'))),
            Action::Input(Key::RParen)
        );
    }

    #[test]
    fn test_handle_decimal_point() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('.'))),
            Action::Input(Key::Decimal)
        );
    }

    #[test]
    fn test_handle_equals_submits() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            Action::Input(Key::Submit)
        );
    }

    // ===== Action key tests =====

    #[test]
    fn test_handle_enter() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            Action::Input(Key::Submit)
        );
    }

    #[test]
    fn test_handle_backspace() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            Action::Input(Key::Backspace)
        );
    }

    #[test]
    fn test_handle_escape() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            Action::Input(Key::Clear)
        );
    }

    #[test]
    fn test_handle_q_quits() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('q'))), Action::Quit);
    }

    // ===== Ctrl key tests =====

    #[test]
    fn test_handle_ctrl_c() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            Action::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_q() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            Action::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_u() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('u'))),
            Action::Input(Key::Clear)
        );
    }

    #[test]
    fn test_handle_ctrl_unknown() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            Action::None
        );
    }

    // ===== Ignored input tests =====

    #[test]
    fn test_handle_letter_is_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::Char('a'))), Action::None);
    }

    #[test]
    fn test_handle_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), Action::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::Tab)), Action::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::Left)), Action::None);
    }

    #[test]
    fn test_handle_release_is_ignored() {
        let handler = InputHandler::new();
        let event =
            KeyEvent::new_with_kind(KeyCode::Char('5'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(handler.handle_key(event), Action::None);
    }

    // ===== Action tests =====

    #[test]
    fn test_action_copy() {
        let action = Action::Input(Key::Digit(3));
        let copied: Action = action;
        assert_eq!(action, copied);
    }

    #[test]
    fn test_input_handler_default() {
        let handler = InputHandler::default();
        assert_eq!(handler.handle_key(key_event(KeyCode::Enter)), Action::Input(Key::Submit));
    }
}
