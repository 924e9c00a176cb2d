//! Sumadora - calculator input pipeline
//!
//! Accepts a user-composed arithmetic string (digits, decimal points,
//! the four basic operators, parentheses) and safely reduces it to a
//! single numeric result or a classified error. Three pieces:
//!
//! - **Tokenizer/Validator**: folds display glyphs (`×` `÷` `−`) to
//!   canonical operators, validates the character set and operator
//!   runs, then scans tokens.
//! - **Evaluator**: recursive descent with standard precedence,
//!   parenthesis nesting, unary sign chains, and a 12-digit epsilon
//!   correction on the result.
//! - **Display buffer**: the keystroke state machine front ends drive
//!   (append, backspace, clear, submit), with per-operand decimal
//!   deduplication and a cancellable error auto-clear.
//!
//! # Example
//!
//! ```rust
//! use sumadora::prelude::*;
//!
//! // Evaluate an expression string directly
//! let value = evaluate_str("(1 + 2) × 3").unwrap();
//! assert_eq!(value, 9.0);
//!
//! // Or drive the display buffer key by key
//! let mut display = DisplayBuffer::new();
//! for ch in "0.1+0.2".chars() {
//!     display.append(ch);
//! }
//! display.submit();
//! assert_eq!(display.text(), "0.3");
//! ```

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod display;
pub mod key;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::eval::{evaluate, evaluate_str, round_result};
    pub use crate::core::lexer::{normalize, tokenize, Token, Tokenizer};
    pub use crate::core::{is_operator_char, CalcError, CalcResult, Operation};
    pub use crate::display::{format_result, DisplayBuffer, DisplayOptions};
    pub use crate::key::Key;
}
