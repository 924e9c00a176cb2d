//! Expression tokenizer and input validation
//!
//! Raw input passes through three stages before scanning: glyph
//! normalization (total, never fails), character-class validation, and
//! operator-run validation. Validation failures classify ahead of any
//! scanning error, so `"5**2@"` reports the character, not the run.

use crate::core::{CalcError, CalcResult, Operation};

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Binary operator
    Operator(Operation),
    /// Left parenthesis
    LeftParen,
    /// Right parenthesis
    RightParen,
}

impl Token {
    /// Returns true if this token is an operator
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Operator(_))
    }

    /// Returns true if this token is a number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

/// Maps display glyphs to canonical operators (`×` `÷` `−` to `* / -`)
///
/// Total: characters outside the glyph set pass through untouched for
/// the validation stage to classify.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            '\u{00D7}' => '*',
            '\u{00F7}' => '/',
            '\u{2212}' => '-',
            other => other,
        })
        .collect()
}

/// Tokenizes a raw input string
///
/// Convenience for the full pipeline: normalization, validation,
/// scanning.
pub fn tokenize(raw: &str) -> CalcResult<Vec<Token>> {
    Tokenizer::new(raw).tokenize()
}

/// Tokenizer for converting raw expression strings to tokens
///
/// Owns the canonical (glyph-normalized) copy of its input.
#[derive(Debug)]
pub struct Tokenizer {
    canonical: String,
    pos: usize,
}

impl Tokenizer {
    /// Creates a tokenizer over the normalized form of `raw`
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            canonical: normalize(raw),
            pos: 0,
        }
    }

    /// Returns the canonical form of the input
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Validates and tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        validate_charset(&self.canonical)?;
        validate_operator_runs(&self.canonical)?;

        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        let token = match ch {
            '0'..='9' | '.' => self.read_number()?,
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            _ => match Operation::from_char(ch) {
                Some(op) => {
                    self.advance();
                    Token::Operator(op)
                }
                None => return Err(CalcError::InvalidCharacter(ch)),
            },
        };

        Ok(Some(token))
    }

    fn current_char(&self) -> Option<char> {
        self.canonical[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Consumes a maximal digit/decimal-point run
    ///
    /// The run is taken greedily so `"1.2.3"` is a single malformed
    /// literal rather than a number followed by stray syntax.
    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() || ch == '.' {
                self.advance();
            } else {
                break;
            }
        }

        let run = &self.canonical[start..self.pos];
        let value: f64 = run
            .parse()
            .map_err(|_| CalcError::MalformedNumber(run.to_string()))?;

        Ok(Token::Number(value))
    }
}

/// Accepts digits, the four ASCII operators, parens, dot, whitespace
fn validate_charset(canonical: &str) -> CalcResult<()> {
    for ch in canonical.chars() {
        let allowed = ch.is_ascii_digit()
            || matches!(ch, '+' | '-' | '*' | '/' | '(' | ')' | '.')
            || ch.is_whitespace();
        if !allowed {
            return Err(CalcError::InvalidCharacter(ch));
        }
    }
    Ok(())
}

/// Rejects adjacent `*`/`/` pairs
///
/// Adjacency is literal: whitespace breaks a run, so `"5 * * 2"` passes
/// here and fails in the evaluator instead. `+`/`-` runs stay legal for
/// unary signs.
fn validate_operator_runs(canonical: &str) -> CalcResult<()> {
    let mut prev_was_mul_div = false;
    for ch in canonical.chars() {
        let is_mul_div = matches!(ch, '*' | '/');
        if is_mul_div && prev_was_mul_div {
            return Err(CalcError::InvalidOperatorSequence);
        }
        prev_was_mul_div = is_mul_div;
    }
    Ok(())
}
