//! Character-level scanning for the parser.
//!
//! [`CharCursor`] is a single-pass cursor over the source text with exactly
//! one token of pushback and a 1-based line counter for diagnostics. It is
//! the only component that tracks input position; the parser above it is
//! stateless with respect to position.

/// A forward cursor over source characters with one-step pushback.
///
/// `back()` rewinds exactly one position; callers must not call it twice
/// without an intervening `next()`. The line counter follows the cursor in
/// both directions, so a pushed-back line feed is not counted twice.
#[derive(Debug)]
pub(crate) struct CharCursor {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl CharCursor {
    pub(crate) fn new(input: &str) -> Self {
        CharCursor {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    /// Returns the next character and advances, or `None` at end of input.
    pub(crate) fn next(&mut self) -> Option<char> {
        let ch = *self.chars.get(self.pos)?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Rewinds one position.
    ///
    /// Single-step only: at most one `back()` per `next()`.
    pub(crate) fn back(&mut self) {
        debug_assert!(self.pos > 0, "back() before any next()");
        self.pos -= 1;
        if self.chars[self.pos] == '\n' {
            self.line -= 1;
        }
    }

    /// Returns the character most recently returned by `next()`.
    pub(crate) fn current(&self) -> char {
        debug_assert!(self.pos > 0, "current() before any next()");
        self.chars[self.pos - 1]
    }

    /// Reports whether the cursor is exhausted.
    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Returns the current 1-based line number.
    pub(crate) fn line(&self) -> usize {
        self.line
    }
}
