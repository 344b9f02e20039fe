//! Element parser and top-level entry points.

/// Recursive element parser.
pub mod core;
/// Parser limits.
pub mod options;

pub use self::core::{
    MarkupParser, ParseIssue, ParseOutcome, parse, parse_element, parse_element_collecting,
    parse_with,
};
pub use options::{DEFAULT_ITERATION_LIMIT, DEFAULT_MAX_DEPTH, ParserOptions};
