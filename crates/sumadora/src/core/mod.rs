//! Core expression pipeline: tokenizer, validator, and evaluator
//!
//! Raw input flows through normalization, validation, and recursive
//! descent evaluation. Every failure carries a classification so hosts
//! can log what went wrong while the display shows a single `Error`
//! state.

pub mod eval;
pub mod lexer;
mod ops;

pub use ops::{is_operator_char, Operation};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Classified pipeline failures
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CalcError {
    /// Character outside the accepted input set
    #[error("Invalid character: '{0}'")]
    InvalidCharacter(char),

    /// Adjacent `*`/`/` operators with nothing between them
    #[error("Invalid operator sequence")]
    InvalidOperatorSequence,

    /// Digit/decimal-point run that is not a valid number
    #[error("Malformed number: '{0}'")]
    MalformedNumber(String),

    /// Expression violates the grammar
    #[error("Syntax error: {0}")]
    SyntaxError(String),

    /// Division by zero or a non-finite result
    #[error("Math error")]
    MathError,
}

impl CalcError {
    /// Create a syntax error
    #[must_use]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::SyntaxError(message.into())
    }

    /// Returns the short classification name used in diagnostics
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCharacter(_) => "invalid_character",
            Self::InvalidOperatorSequence => "invalid_operator_sequence",
            Self::MalformedNumber(_) => "malformed_number",
            Self::SyntaxError(_) => "syntax_error",
            Self::MathError => "math_error",
        }
    }
}
