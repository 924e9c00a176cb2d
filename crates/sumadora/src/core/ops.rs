//! Arithmetic operator model
//!
//! Each operator has two spellings: the ASCII form used by the
//! evaluation pipeline and the glyph form shown on the display.

use crate::core::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};

/// Type-safe operator enum - compile-time guarantee of valid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// Returns the ASCII symbol used in normalized expressions
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the display glyph (`+`, `−`, `×`, `÷`)
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '\u{2212}',
            Self::Multiply => '\u{00D7}',
            Self::Divide => '\u{00F7}',
        }
    }

    /// Parses either spelling of an operator character
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' | '\u{2212}' => Some(Self::Subtract),
            '*' | '\u{00D7}' => Some(Self::Multiply),
            '/' | '\u{00F7}' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns the precedence level for operator ordering (higher = evaluated first)
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
        }
    }

    /// Applies the operator to two operands
    ///
    /// A zero divisor is rejected here rather than left to produce a
    /// non-finite value, so it cannot launder through an enclosing
    /// expression.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::MathError);
                }
                Ok(a / b)
            }
        }
    }
}

/// Returns true for any operator character in either spelling
#[must_use]
pub const fn is_operator_char(ch: char) -> bool {
    Operation::from_char(ch).is_some()
}
