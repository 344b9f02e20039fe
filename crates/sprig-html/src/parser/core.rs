use sprig_common::warning::warn_once;
use sprig_dom::{ElementNode, Node, TextNode};

use super::options::ParserOptions;
use crate::cursor::{Cursor, is_markup_whitespace};
use crate::error::{ParseError, SourcePosition};
use crate::lexer::{Shape, classify};
use crate::tag::extract_tag;

/// Component name used for warnings.
const COMPONENT: &str = "Markup";

/// A non-fatal problem noticed during a parse.
///
/// Issues never change the resulting tree; they record input that was
/// accepted but ignored. Each one is also reported through
/// [`warn_once`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Human-readable description.
    pub message: String,
    /// Where the ignored input starts.
    pub position: SourcePosition,
}

/// Result of a successful top-level parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome<'a> {
    /// The root element, or `None` if the input does not start with one.
    pub root: Option<ElementNode>,
    /// Input left over after the root element, without leading whitespace.
    pub remainder: &'a str,
    /// Ignored input noticed along the way.
    pub issues: Vec<ParseIssue>,
}

/// Top-level parser: owns the cursor for one parse of one input.
///
/// `run` consumes the parser, so a cursor can never be reused for a second
/// parse.
///
/// ```
/// use sprig_html::MarkupParser;
///
/// let outcome = MarkupParser::new("<ul><li>a</li></ul> trailing")
///     .with_iteration_limit(10)
///     .run()
///     .expect("well-formed");
///
/// assert_eq!(outcome.root.map(|ul| ul.tag_name), Some("ul".to_string()));
/// assert_eq!(outcome.remainder, "trailing");
/// ```
#[derive(Debug, Clone)]
pub struct MarkupParser<'a> {
    cursor: Cursor<'a>,
    options: ParserOptions,
}

impl<'a> MarkupParser<'a> {
    /// Create a parser over `input` with default options.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            options: ParserOptions::default(),
        }
    }

    /// Replace all options at once.
    #[must_use]
    pub const fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Set how many passes an element may make without finding its close tag.
    #[must_use]
    pub const fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.options.iteration_limit = limit;
        self
    }

    /// Set how many elements may be open at once.
    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = depth;
        self
    }

    /// The options this parser will run with.
    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse the root element and report what is left over.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedMarkup`] if an element is never closed
    /// within the iteration limit, and [`ParseError::NestingTooDeep`] if the
    /// markup nests deeper than the depth limit.
    pub fn run(mut self) -> Result<ParseOutcome<'a>, ParseError> {
        let mut frame = ElementParser {
            cursor: &mut self.cursor,
            options: &self.options,
            issues: Vec::new(),
        };
        let root = frame.element(0)?;
        let mut issues = frame.issues;

        self.cursor.skip_whitespace();
        let remainder = self.cursor.remaining();
        if !remainder.is_empty() {
            let message = match &root {
                Some(root) => format!(
                    "ignoring {} bytes of input after the root element <{}>",
                    remainder.len(),
                    root.tag_name
                ),
                None => "input does not start with an element".to_string(),
            };
            issues.push(report(message, self.cursor.position()));
        }

        Ok(ParseOutcome {
            root,
            remainder,
            issues,
        })
    }
}

/// Parse `input` and return its root element.
///
/// Returns `Ok(None)` for input that does not start with an element,
/// including the empty string.
///
/// # Errors
///
/// See [`MarkupParser::run`].
pub fn parse(input: &str) -> Result<Option<ElementNode>, ParseError> {
    parse_with(input, ParserOptions::default())
}

/// Parse `input` with explicit limits and return its root element.
///
/// # Errors
///
/// See [`MarkupParser::run`].
pub fn parse_with(input: &str, options: ParserOptions) -> Result<Option<ElementNode>, ParseError> {
    MarkupParser::new(input)
        .with_options(options)
        .run()
        .map(|outcome| outcome.root)
}

/// Parse one element, and its whole subtree, at the head of `cursor`.
///
/// Whitespace before the element is skipped. Returns `Ok(None)` without
/// consuming anything else if no start or self-closing tag begins there.
///
/// Ignored attribute syntax is only reported through the warning channel;
/// use [`parse_element_collecting`] to keep it as [`ParseIssue`]s.
///
/// # Errors
///
/// See [`MarkupParser::run`].
pub fn parse_element(
    cursor: &mut Cursor<'_>,
    options: &ParserOptions,
) -> Result<Option<ElementNode>, ParseError> {
    let mut issues = Vec::new();
    parse_element_collecting(cursor, options, &mut issues)
}

/// Like [`parse_element`], appending any ignored input to `issues`.
///
/// Issues are appended even when the parse fails.
///
/// # Errors
///
/// See [`MarkupParser::run`].
pub fn parse_element_collecting(
    cursor: &mut Cursor<'_>,
    options: &ParserOptions,
    issues: &mut Vec<ParseIssue>,
) -> Result<Option<ElementNode>, ParseError> {
    let mut frame = ElementParser {
        cursor,
        options,
        issues: std::mem::take(issues),
    };
    let result = frame.element(0);
    *issues = frame.issues;
    result
}

/// State threaded through the recursive descent.
struct ElementParser<'a, 'p> {
    cursor: &'p mut Cursor<'a>,
    options: &'p ParserOptions,
    issues: Vec<ParseIssue>,
}

impl<'a> ElementParser<'a, '_> {
    /// Parse the element at the head of the cursor, `depth` being the number
    /// of elements already open around it.
    fn element(&mut self, depth: usize) -> Result<Option<ElementNode>, ParseError> {
        self.cursor.skip_whitespace();
        let raw = match classify(self.cursor.remaining()) {
            Shape::SelfClosingTag { raw } => return Ok(Some(self.self_closing(raw))),
            Shape::StartTag { raw } => raw,
            _ => return Ok(None),
        };

        let start = self.cursor.consumed();
        let parts = extract_tag(raw);
        if depth >= self.options.max_depth {
            return Err(ParseError::NestingTooDeep {
                tag: parts.name.to_string(),
                limit: self.options.max_depth,
                position: self.cursor.locate(start),
            });
        }
        self.cursor.advance(raw.len());
        self.note_ignored(&parts.ignored, raw, start);

        let mut element = ElementNode::new(parts.name, raw, parts.attributes);
        let mut iterations = 0;
        loop {
            self.cursor.skip_whitespace();
            let shape = classify(self.cursor.remaining());

            if let Some(text) = shape.leading_text() {
                self.cursor.advance(text.len());
                element.children.push(Node::Text(TextNode::trimmed(text)));
            }
            if let Some(tag) = shape.self_closing_tag() {
                let child = self.self_closing(tag);
                element.children.push(Node::Element(child));
            }
            if shape.start_tag().is_some()
                && let Some(child) = self.element(depth + 1)?
            {
                element.children.push(Node::Element(child));
            }

            self.cursor.skip_whitespace();
            if let Shape::CloseTag { name, raw } = classify(self.cursor.remaining())
                && name.eq_ignore_ascii_case(&element.tag_name)
            {
                self.cursor.advance(raw.len());
                break;
            }

            iterations += 1;
            if iterations > self.options.iteration_limit {
                return Err(ParseError::MalformedMarkup {
                    tag: element.tag_name,
                    limit: self.options.iteration_limit,
                    position: self.cursor.position(),
                });
            }
        }

        Ok(Some(element))
    }

    /// Consume a self-closing tag at the head of the cursor.
    fn self_closing(&mut self, raw: &'a str) -> ElementNode {
        let start = self.cursor.consumed();
        self.cursor.advance(raw.len());
        let parts = extract_tag(raw);
        self.note_ignored(&parts.ignored, raw, start);
        ElementNode::self_closing(parts.name, raw, parts.attributes)
    }

    /// Record ignored attribute syntax of the tag starting at byte `start`.
    fn note_ignored(&mut self, ignored: &[&str], raw: &str, start: usize) {
        if ignored.is_empty() {
            return;
        }
        let position = self.cursor.locate(start);
        for fragment in ignored {
            let fragment = fragment.trim_matches(is_markup_whitespace);
            let message = format!("ignoring unsupported attribute syntax `{fragment}` in {raw}");
            self.issues.push(report(message, position));
        }
    }
}

/// Emit a warning and wrap it as an issue.
fn report(message: String, position: SourcePosition) -> ParseIssue {
    warn_once(COMPONENT, &message);
    ParseIssue { message, position }
}
