//! Logical input vocabulary
//!
//! Physical keystrokes and buttons reduce to [`Key`] before they reach
//! the display buffer. The operator remap lives here: a physical `*`
//! key is an operator key whose display character is the glyph `×`.

use serde::{Deserialize, Serialize};

use crate::core::Operation;

/// One logical calculator key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Digit key `0`-`9`
    Digit(u8),
    /// Decimal point key
    Decimal,
    /// Operator key
    Op(Operation),
    /// Opening parenthesis key
    LParen,
    /// Closing parenthesis key
    RParen,
    /// Evaluate the current expression (`=` or Enter)
    Submit,
    /// Remove the last character
    Backspace,
    /// Reset the display
    Clear,
}

impl Key {
    /// Maps a printable character to its logical key
    ///
    /// Operator characters accept both spellings; `=` maps to submit.
    /// Enter, Backspace, and Escape have no character form and are
    /// mapped by the host's input layer.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(Self::Digit(ch as u8 - b'0')),
            '.' => Some(Self::Decimal),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            '=' => Some(Self::Submit),
            _ => Operation::from_char(ch).map(Self::Op),
        }
    }

    /// Returns the character this key appends to the display
    ///
    /// Operator keys yield their display glyph (a physical `*` appends
    /// `×`). Submit, Backspace, and Clear are actions, not characters,
    /// and yield nothing; so does a digit above `9`.
    #[must_use]
    pub fn to_display_char(self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10),
            Self::Decimal => Some('.'),
            Self::Op(op) => Some(op.glyph()),
            Self::LParen => Some('('),
            Self::RParen => Some(')'),
            Self::Submit | Self::Backspace | Self::Clear => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== from_char tests =====

    #[test]
    fn test_from_char_digits() {
        for (ch, d) in ('0'..='9').zip(0u8..=9) {
            assert_eq!(Key::from_char(ch), Some(Key::Digit(d)));
        }
    }

    #[test]
    fn test_from_char_decimal_and_parens() {
        assert_eq!(Key::from_char('.'), Some(Key::Decimal));
        assert_eq!(Key::from_char('('), Some(Key::LParen));
        assert_eq!(Key::from_char(')'), Some(Key::RParen));
    }

    #[test]
    fn test_from_char_equals_is_submit() {
        assert_eq!(Key::from_char('='), Some(Key::Submit));
    }

    #[test]
    fn test_from_char_ascii_operators() {
        assert_eq!(Key::from_char('+'), Some(Key::Op(Operation::Add)));
        assert_eq!(Key::from_char('-'), Some(Key::Op(Operation::Subtract)));
        assert_eq!(Key::from_char('*'), Some(Key::Op(Operation::Multiply)));
        assert_eq!(Key::from_char('/'), Some(Key::Op(Operation::Divide)));
    }

    #[test]
    fn test_from_char_glyph_operators() {
        assert_eq!(Key::from_char('\u{2212}'), Some(Key::Op(Operation::Subtract)));
        assert_eq!(Key::from_char('\u{00D7}'), Some(Key::Op(Operation::Multiply)));
        assert_eq!(Key::from_char('\u{00F7}'), Some(Key::Op(Operation::Divide)));
    }

    #[test]
    fn test_from_char_rejects_unmapped() {
        assert_eq!(Key::from_char('a'), None);
        assert_eq!(Key::from_char(' '), None);
        assert_eq!(Key::from_char('^'), None);
        assert_eq!(Key::from_char('%'), None);
    }

    // ===== to_display_char tests =====

    #[test]
    fn test_display_char_digits() {
        assert_eq!(Key::Digit(0).to_display_char(), Some('0'));
        assert_eq!(Key::Digit(9).to_display_char(), Some('9'));
    }

    #[test]
    fn test_display_char_out_of_range_digit() {
        assert_eq!(Key::Digit(12).to_display_char(), None);
    }

    #[test]
    fn test_display_char_punctuation() {
        assert_eq!(Key::Decimal.to_display_char(), Some('.'));
        assert_eq!(Key::LParen.to_display_char(), Some('('));
        assert_eq!(Key::RParen.to_display_char(), Some(')'));
    }

    #[test]
    fn test_keyboard_remap_to_glyphs() {
        // Physical `/ * - +` keys append `÷ × − +`
        assert_eq!(
            Key::from_char('/').and_then(Key::to_display_char),
            Some('\u{00F7}')
        );
        assert_eq!(
            Key::from_char('*').and_then(Key::to_display_char),
            Some('\u{00D7}')
        );
        assert_eq!(
            Key::from_char('-').and_then(Key::to_display_char),
            Some('\u{2212}')
        );
        assert_eq!(
            Key::from_char('+').and_then(Key::to_display_char),
            Some('+')
        );
    }

    #[test]
    fn test_action_keys_have_no_display_char() {
        assert_eq!(Key::Submit.to_display_char(), None);
        assert_eq!(Key::Backspace.to_display_char(), None);
        assert_eq!(Key::Clear.to_display_char(), None);
    }

    #[test]
    fn test_digit_round_trip() {
        for ch in '0'..='9' {
            let key = Key::from_char(ch).unwrap();
            assert_eq!(key.to_display_char(), Some(ch));
        }
    }
}
