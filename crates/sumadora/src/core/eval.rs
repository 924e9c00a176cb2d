//! Recursive descent expression evaluator
//!
//! Grammar (left-associative with the usual precedence; parentheses
//! override):
//!
//! ```text
//! expr   ::= term (('+' | '-') term)*
//! term   ::= factor (('*' | '/') factor)*
//! factor ::= NUMBER | '(' expr ')' | ('+' | '-') factor
//! ```
//!
//! The descent folds values as it goes; no tree is materialized. The
//! final value must be finite and is rounded to 12 decimal digits to
//! absorb floating-point representation noise.

use crate::core::lexer::{self, Token};
use crate::core::{CalcError, CalcResult, Operation};

/// Scale factor for rounding results to 12 decimal digits
const ROUND_SCALE: f64 = 1e12;

/// Evaluates a raw expression string end to end
///
/// Trims, tokenizes (normalization and validation included), then
/// evaluates. An empty or whitespace-only string is a syntax error.
pub fn evaluate_str(input: &str) -> CalcResult<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CalcError::syntax("Empty expression"));
    }

    let tokens = lexer::tokenize(trimmed)?;
    evaluate(&tokens)
}

/// Evaluates a token stream to a single finite value
pub fn evaluate(tokens: &[Token]) -> CalcResult<f64> {
    if tokens.is_empty() {
        return Err(CalcError::syntax("Empty expression"));
    }

    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.parse_expr()?;

    // Ensure all tokens consumed
    if parser.pos < parser.tokens.len() {
        return Err(CalcError::syntax(format!(
            "Unexpected token at position {}",
            parser.pos
        )));
    }

    if !value.is_finite() {
        return Err(CalcError::MathError);
    }

    Ok(round_result(value))
}

/// Rounds a value to 12 decimal digits with a machine-epsilon bias
///
/// This makes `0.1 + 0.2` come out exactly `0.3`. Values whose scaled
/// form overflows are returned untouched rather than collapsed to
/// infinity.
#[must_use]
pub fn round_result(value: f64) -> f64 {
    let scaled = (value + f64::EPSILON) * ROUND_SCALE;
    if scaled.is_finite() {
        scaled.round() / ROUND_SCALE
    } else {
        value
    }
}

/// Cursor over the token stream; each grammar rule folds to a value
struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Parser<'_> {
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_expr(&mut self) -> CalcResult<f64> {
        let mut value = self.parse_term()?;

        while let Some(token) = self.current() {
            let op = match token {
                Token::Operator(Operation::Add) => Operation::Add,
                Token::Operator(Operation::Subtract) => Operation::Subtract,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_term()?;
            value = op.apply(value, rhs)?;
        }

        Ok(value)
    }

    fn parse_term(&mut self) -> CalcResult<f64> {
        let mut value = self.parse_factor()?;

        while let Some(token) = self.current() {
            let op = match token {
                Token::Operator(Operation::Multiply) => Operation::Multiply,
                Token::Operator(Operation::Divide) => Operation::Divide,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_factor()?;
            value = op.apply(value, rhs)?;
        }

        Ok(value)
    }

    fn parse_factor(&mut self) -> CalcResult<f64> {
        // Unary sign chains: grammar territory, not a lexical defect
        match self.current() {
            Some(Token::Operator(Operation::Subtract)) => {
                self.advance();
                Ok(-self.parse_factor()?)
            }
            Some(Token::Operator(Operation::Add)) => {
                self.advance();
                self.parse_factor()
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> CalcResult<f64> {
        let token = self
            .advance()
            .ok_or_else(|| CalcError::syntax("Unexpected end of expression"))?;

        match token {
            Token::Number(n) => Ok(*n),
            Token::LeftParen => {
                let value = self.parse_expr()?;
                match self.advance() {
                    Some(Token::RightParen) => Ok(value),
                    Some(other) => Err(CalcError::syntax(format!(
                        "Expected ')' but found {other:?}"
                    ))),
                    None => Err(CalcError::syntax("Unclosed parenthesis")),
                }
            }
            other => Err(CalcError::syntax(format!("Unexpected token: {other:?}"))),
        }
    }
}
