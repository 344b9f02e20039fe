//! The parse cursor.
//!
//! A [`Cursor`] is the only mutable state of a parse. It borrows the input
//! and keeps a view of the suffix that has not been consumed yet. Every
//! consuming operation strictly shortens that view; nothing is ever given
//! back.

#[cfg(test)]
use std::cell::Cell;

use crate::error::SourcePosition;

#[cfg(test)]
thread_local! {
    /// Number of line/column lookups made on this thread.
    pub(crate) static LOCATE_CALLS: Cell<usize> = const { Cell::new(0) };
}

/// Returns true for the characters skipped between markup constructs:
/// space, tab, carriage return, line feed and form feed.
#[must_use]
pub const fn is_markup_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C')
}

/// Mutable view over the unparsed suffix of a source string.
///
/// A cursor belongs to exactly one top-level parse. Nested element parses
/// receive it by `&mut`, so progress made by a child is progress for every
/// ancestor frame.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The full input, kept for computing positions.
    source: &'a str,
    /// Suffix of `source` that has not been consumed.
    remaining: &'a str,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            remaining: source,
        }
    }

    /// The text that has not been consumed yet.
    #[must_use]
    pub const fn remaining(&self) -> &'a str {
        self.remaining
    }

    /// Returns true once every character has been consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.source.len() - self.remaining.len()
    }

    /// Line and column of the cursor within the original input.
    ///
    /// This scans the consumed prefix, so callers on a hot path should keep
    /// [`consumed`](Self::consumed) and resolve it with
    /// [`locate`](Self::locate) only when a position is reported.
    #[must_use]
    pub fn position(&self) -> SourcePosition {
        self.locate(self.consumed())
    }

    /// Line and column of byte `offset` within the original input.
    #[must_use]
    pub fn locate(&self, offset: usize) -> SourcePosition {
        #[cfg(test)]
        LOCATE_CALLS.with(|calls| calls.set(calls.get() + 1));
        SourcePosition::locate(self.source, offset)
    }

    /// Remove the first `n` bytes of the remaining text.
    ///
    /// `n` is clamped to the remaining length, and an `n` that falls inside
    /// a multi-byte character is rounded up to the end of that character.
    pub fn advance(&mut self, n: usize) {
        let mut n = n.min(self.remaining.len());
        while !self.remaining.is_char_boundary(n) {
            n += 1;
        }
        self.remaining = &self.remaining[n..];
    }

    /// Remove the leading run of markup whitespace, if any.
    ///
    /// Calling this twice in a row has the same effect as calling it once.
    pub fn skip_whitespace(&mut self) {
        self.remaining = self.remaining.trim_start_matches(is_markup_whitespace);
    }
}
