//! Fatal parse errors.
//!
//! Only two conditions abort a parse: an element whose close tag is never
//! found within the iteration limit, and nesting deeper than the depth
//! limit. Anything the classifier does not recognize is simply not consumed.

use std::fmt;

use thiserror::Error;

/// A location in the input, used to point at where a parse stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl SourcePosition {
    /// Compute the line and column of byte `offset` within `source`.
    ///
    /// Offsets past the end are clamped to the end of the input.
    #[must_use]
    pub fn locate(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);

        Self {
            offset,
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
        }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that abort a parse. No partial tree is returned with them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The element's children loop ran past the iteration limit without
    /// reaching a matching close tag.
    #[error("malformed markup at {position}: no closing tag for <{tag}> within {limit} iterations")]
    MalformedMarkup {
        /// Name of the element that was never closed.
        tag: String,
        /// The iteration limit that was exceeded.
        limit: usize,
        /// Where the cursor stood when the limit was hit.
        position: SourcePosition,
    },

    /// Opening `tag` would nest elements deeper than the configured limit.
    #[error("markup nested too deeply at {position}: <{tag}> exceeds the depth limit of {limit}")]
    NestingTooDeep {
        /// Name of the element that could not be opened.
        tag: String,
        /// The depth limit that was exceeded.
        limit: usize,
        /// Position of the offending start tag.
        position: SourcePosition,
    },
}

impl ParseError {
    /// Where in the input the parse stopped.
    #[must_use]
    pub const fn position(&self) -> SourcePosition {
        match self {
            Self::MalformedMarkup { position, .. } | Self::NestingTooDeep { position, .. } => {
                *position
            }
        }
    }

    /// Name of the element the error refers to.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::MalformedMarkup { tag, .. } | Self::NestingTooDeep { tag, .. } => tag,
        }
    }
}
