//! Limits that keep a parse bounded on malformed or hostile input.

/// Default number of passes an element's children loop may make without
/// finding its close tag.
pub const DEFAULT_ITERATION_LIMIT: usize = 30;

/// Default maximum number of simultaneously open elements.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Limits applied to a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// How many passes of an element's children loop may end without
    /// reaching the matching close tag before the parse fails with
    /// `ParseError::MalformedMarkup`. Each pass consumes at most one text
    /// run plus one child element, so this also bounds the number of
    /// children a single element may have.
    pub iteration_limit: usize,
    /// How many elements may be open at once. Opening one more fails with
    /// `ParseError::NestingTooDeep`, which keeps recursion within a known
    /// stack budget.
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            iteration_limit: DEFAULT_ITERATION_LIMIT,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
