//! Recursive-descent markup parser for Sprig.
//!
//! # Scope
//!
//! This crate implements:
//! - **Cursor** - the remaining unparsed suffix of the input, shrinking as
//!   the parse makes progress
//! - **Lexical classifier** - decides what sits at the head of the cursor
//!   (start tag, self-closing tag, close tag, or text followed by one of those)
//! - **Tag extraction** - element name and quoted attributes from raw tag text
//! - **Element parser** - consumes one element and its whole subtree,
//!   recursing for nested elements
//!
//! There is no separate token stream: each step classifies the head of the
//! cursor and consumes exactly what it matched.
//!
//! # Not Implemented
//!
//! - Comments, CDATA sections and doctypes
//! - Raw-text elements (`script`, `style`)
//! - Implicit tag closing and void elements written without `/>`
//! - Unquoted and valueless attributes (ignored with a warning)
//! - Error recovery: a document that never closes an element fails as a whole
//!
//! # Example
//!
//! ```
//! let root = sprig_html::parse("<p class=\"intro\">Hello<br /></p>")
//!     .expect("well-formed")
//!     .expect("has a root element");
//!
//! assert_eq!(root.tag_name, "p");
//! assert_eq!(root.attribute_value("class"), Some("intro"));
//! assert_eq!(root.children.len(), 2);
//! ```

/// Source cursor over the unparsed input.
pub mod cursor;
/// Fatal parse errors and source positions.
pub mod error;
/// Classification of the head of the cursor.
pub mod lexer;
/// Element parser and top-level entry points.
pub mod parser;
/// Tag name and attribute extraction.
pub mod tag;

pub use cursor::Cursor;
pub use error::{ParseError, SourcePosition};
pub use lexer::{Shape, classify};
pub use parser::{
    DEFAULT_ITERATION_LIMIT, DEFAULT_MAX_DEPTH, MarkupParser, ParseIssue, ParseOutcome,
    ParserOptions, parse, parse_element, parse_element_collecting, parse_with,
};
pub use sprig_dom::{Attribute, ElementNode, Node, TextNode};
pub use tag::{TagParts, extract_tag};
