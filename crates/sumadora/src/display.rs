//! Display buffer state machine
//!
//! Owns the mutable "current expression text" a front end shows to the
//! user. Keystroke-derived operations mutate it (append, backspace,
//! clear, submit); submit hands the text to the evaluation pipeline and
//! writes the result or the literal `Error` back. The buffer is a plain
//! owned value: construct one, inject it into whatever renders it.
//!
//! After an error is shown, a one-shot auto-clear resets the display to
//! `0`. The deadline is data owned by the buffer, never an ambient
//! timer: hosts poll it (or ask for the deadline to size their event
//! timeout), and every later user action cancels it first, so stale
//! recoveries cannot race fresh input.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{eval, is_operator_char, CalcError};
use crate::key::Key;

/// Tunable display policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Maximum displayed characters; longer text is silently truncated
    pub max_len: usize,
    /// Delay before an `Error` display auto-clears back to `0`
    pub error_clear_delay: Duration,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            max_len: Self::DEFAULT_MAX_LEN,
            error_clear_delay: Self::DEFAULT_ERROR_CLEAR_DELAY,
        }
    }
}

impl DisplayOptions {
    /// Default display capacity in characters
    pub const DEFAULT_MAX_LEN: usize = 100;

    /// Default error auto-clear delay
    pub const DEFAULT_ERROR_CLEAR_DELAY: Duration = Duration::from_millis(900);

    /// Creates options with the default policies
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum display length
    #[must_use]
    pub const fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Sets the error auto-clear delay
    #[must_use]
    pub const fn with_error_clear_delay(mut self, delay: Duration) -> Self {
        self.error_clear_delay = delay;
        self
    }
}

/// Display buffer: the single mutable string behind the calculator face
///
/// Initialized to `0`. Never empty. Text length is capped at
/// [`DisplayOptions::max_len`] characters by silent truncation.
#[derive(Debug, Clone)]
pub struct DisplayBuffer {
    text: String,
    pending_clear: Option<Instant>,
    last_error: Option<CalcError>,
    options: DisplayOptions,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    /// Creates a buffer showing `0` with default policies
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(DisplayOptions::default())
    }

    /// Creates a buffer with custom policies
    #[must_use]
    pub fn with_options(options: DisplayOptions) -> Self {
        Self {
            text: "0".to_string(),
            pending_clear: None,
            last_error: None,
            options,
        }
    }

    /// Returns the current display text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the classified error from the most recent failed submit
    ///
    /// The user only ever sees the literal `Error`; the classification
    /// is kept for logging and tests. Reset by `clear` and by the next
    /// successful submit.
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        self.last_error.as_ref()
    }

    /// Returns the buffer's policies
    #[must_use]
    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Returns the deadline of the pending error auto-clear, if armed
    ///
    /// Hosts can size their event-poll timeout with this.
    #[must_use]
    pub fn auto_clear_deadline(&self) -> Option<Instant> {
        self.pending_clear
    }

    /// Appends one character of user input
    ///
    /// A lone `0` is overwritten unless the character is a decimal
    /// point. A decimal point is dropped (no-op) when the trailing
    /// operand already contains one.
    pub fn append(&mut self, ch: char) {
        self.cancel_auto_clear();

        if ch == '.' && self.current_operand_has_dot() {
            return;
        }

        if self.text == "0" && ch != '.' {
            self.set_text(ch.to_string());
        } else {
            let mut next = std::mem::take(&mut self.text);
            next.push(ch);
            self.set_text(next);
        }
    }

    /// Removes the last character; a one-character display floors to `0`
    pub fn backspace(&mut self) {
        self.cancel_auto_clear();

        self.text.pop();
        if self.text.is_empty() {
            self.text.push('0');
        }
    }

    /// Unconditionally resets the display to `0`
    pub fn clear(&mut self) {
        self.cancel_auto_clear();
        self.text = "0".to_string();
        self.last_error = None;
    }

    /// Evaluates the current text and displays the result or `Error`
    pub fn submit(&mut self) {
        self.submit_at(Instant::now());
    }

    /// Submit against a caller-supplied clock reading
    ///
    /// On failure the auto-clear deadline is armed at
    /// `now + error_clear_delay`.
    pub fn submit_at(&mut self, now: Instant) {
        self.cancel_auto_clear();

        match eval::evaluate_str(&self.text) {
            Ok(value) => {
                debug!(value, "expression evaluated");
                self.last_error = None;
                self.set_text(format_result(value));
            }
            Err(err) => {
                debug!(kind = err.kind(), error = %err, "expression rejected");
                self.last_error = Some(err);
                self.set_text("Error");
                self.pending_clear = Some(now + self.options.error_clear_delay);
            }
        }
    }

    /// Fires the pending auto-clear if its deadline has passed
    ///
    /// Returns true when the display was reset.
    pub fn poll_auto_clear(&mut self) -> bool {
        self.poll_auto_clear_at(Instant::now())
    }

    /// Deadline check against a caller-supplied clock reading
    pub fn poll_auto_clear_at(&mut self, now: Instant) -> bool {
        match self.pending_clear {
            Some(deadline) if now >= deadline => {
                debug!("error auto-clear fired");
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// Dispatches one logical key to the matching operation
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::Submit => self.submit(),
            Key::Backspace => self.backspace(),
            Key::Clear => self.clear(),
            other => {
                if let Some(ch) = other.to_display_char() {
                    self.append(ch);
                }
            }
        }
    }

    /// Replaces the display text, truncating to the first `max_len`
    /// characters
    ///
    /// A defensive cap, not a validation failure. This is raw host
    /// plumbing: the pending auto-clear is unaffected, unlike the
    /// user-facing operations which always cancel it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = truncate_chars(text.into(), self.options.max_len);
    }

    fn cancel_auto_clear(&mut self) {
        self.pending_clear = None;
    }

    /// True when the operand after the most recent operator holds a dot
    ///
    /// Operator boundaries cover both spellings, glyphs included, so a
    /// display like `3.5−2` starts a fresh operand after the `−`.
    fn current_operand_has_dot(&self) -> bool {
        self.text
            .chars()
            .rev()
            .take_while(|ch| !is_operator_char(*ch))
            .any(|ch| ch == '.')
    }
}

/// Canonical decimal rendering of an evaluation result
///
/// Integer-valued results render without a fraction; everything else
/// renders with up to 12 decimal digits, trailing zeros trimmed. Signed
/// zero renders `0`.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.12}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Keeps the first `max_len` characters (not bytes)
fn truncate_chars(text: String, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((idx, _)) => {
            let mut truncated = text;
            truncated.truncate(idx);
            truncated
        }
        None => text,
    }
}
