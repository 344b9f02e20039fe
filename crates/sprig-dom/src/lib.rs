//! Node tree for the Sprig markup parser.
//!
//! The parser produces a plain owned tree: every [`ElementNode`] owns its
//! children directly, and there are no parent pointers or shared nodes.
//!
//! # Design
//!
//! A node is either an element or a text run ([`Node`]). Comments, doctypes
//! and processing instructions have no representation. Nodes are built
//! bottom-up by the parser and never modified after they are attached to a
//! parent, so the tree can be handed to any consumer as-is.

use std::fmt;

use serde::Serialize;

/// A `name="value"` pair found inside a start or self-closing tag.
///
/// Attributes keep the order in which they appear in the tag. Duplicate
/// names are kept as separate entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Attribute name as written in the source.
    pub name: String,
    /// Attribute value with its surrounding quotes removed.
    pub value: Option<String>,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A run of character data between tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextNode {
    /// The text, trimmed of surrounding whitespace.
    pub content: String,
}

impl TextNode {
    /// Create a text node from raw source text, trimming surrounding whitespace.
    #[must_use]
    pub fn trimmed(raw: &str) -> Self {
        Self {
            content: raw.trim().to_string(),
        }
    }
}

/// An element and everything nested inside it.
///
/// Invariant: when `self_closing` is set, `children` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementNode {
    /// Element name as written in the start tag.
    pub tag_name: String,
    /// The start tag exactly as it appeared in the source, e.g. `<div class="x">`.
    pub raw_tag: String,
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    /// Child nodes in source order.
    pub children: Vec<Node>,
    /// Whether the element was written with `/>` and therefore has no children.
    pub self_closing: bool,
}

impl ElementNode {
    /// Create an element that still expects children and a close tag.
    #[must_use]
    pub fn new(
        tag_name: impl Into<String>,
        raw_tag: impl Into<String>,
        attributes: Vec<Attribute>,
    ) -> Self {
        Self {
            tag_name: tag_name.into(),
            raw_tag: raw_tag.into(),
            attributes,
            children: Vec::new(),
            self_closing: false,
        }
    }

    /// Create a self-closing element. It never gets children.
    #[must_use]
    pub fn self_closing(
        tag_name: impl Into<String>,
        raw_tag: impl Into<String>,
        attributes: Vec<Attribute>,
    ) -> Self {
        Self {
            self_closing: true,
            ..Self::new(tag_name, raw_tag, attributes)
        }
    }

    /// Returns the first attribute with the given name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// Returns the value of the first attribute with the given name.
    #[must_use]
    pub fn attribute_value(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(|attr| attr.value.as_deref())
    }

    /// Returns the element's id attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attribute_value("id")
    }

    /// Returns the space-separated class names, in order.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        self.attribute_value("class")
            .map(|list| list.split_ascii_whitespace().collect())
            .unwrap_or_default()
    }

    /// Iterate over the child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Depth-first search for the first element with the given tag name,
    /// starting with this element itself. Names compare ASCII case-insensitively.
    #[must_use]
    pub fn find_element(&self, tag_name: &str) -> Option<&Self> {
        if self.tag_name.eq_ignore_ascii_case(tag_name) {
            return Some(self);
        }
        self.child_elements()
            .find_map(|child| child.find_element(tag_name))
    }

    /// Concatenated text of every descendant text node, in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        collect_text(self, &mut result);
        result
    }

    /// Number of nodes below this element (elements and text, not counting itself).
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| match child {
                Node::Element(element) => 1 + element.descendant_count(),
                Node::Text(_) => 1,
            })
            .sum()
    }

    /// Nesting depth of the subtree; a leaf element has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .child_elements()
            .map(Self::depth)
            .max()
            .unwrap_or_default()
    }
}

fn collect_text(element: &ElementNode, out: &mut String) {
    for child in &element.children {
        match child {
            Node::Text(text) => out.push_str(&text.content),
            Node::Element(element) => collect_text(element, out),
        }
    }
}

/// A child of an element: either a nested element or a text run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// A nested element.
    Element(ElementNode),
    /// A text run.
    Text(TextNode),
}

impl Node {
    /// Get element data if this node is an element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.content.as_str()),
            Self::Element(_) => None,
        }
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Self::Element(element)
    }
}

impl From<TextNode> for Node {
    fn from(text: TextNode) -> Self {
        Self::Text(text)
    }
}

/// Indented dump of a subtree, one node per line.
///
/// Elements render as their tag with attributes, text renders quoted with
/// newlines escaped and spaces shown as `·` so whitespace is visible.
pub struct TreeDump<'a> {
    root: &'a ElementNode,
}

impl<'a> TreeDump<'a> {
    /// Wrap an element for display.
    #[must_use]
    pub const fn new(root: &'a ElementNode) -> Self {
        Self { root }
    }
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, self.root, 0)
    }
}

fn write_element(f: &mut fmt::Formatter<'_>, element: &ElementNode, indent: usize) -> fmt::Result {
    let prefix = "  ".repeat(indent);
    let attrs: Vec<String> = element
        .attributes
        .iter()
        .map(|attr| match &attr.value {
            Some(value) => format!(" {}=\"{value}\"", attr.name),
            None => format!(" {}", attr.name),
        })
        .collect();
    let closer = if element.self_closing { " />" } else { ">" };
    writeln!(f, "{prefix}<{}{}{closer}", element.tag_name, attrs.concat())?;

    for child in &element.children {
        match child {
            Node::Element(child) => write_element(f, child, indent + 1)?,
            Node::Text(text) => {
                let display = text.content.replace('\n', "\\n").replace(' ', "\u{00B7}");
                writeln!(f, "{prefix}  \"{display}\"")?;
            }
        }
    }
    Ok(())
}

/// Print a subtree to stdout, indented by nesting level.
pub fn print_tree(root: &ElementNode) {
    print!("{}", TreeDump::new(root));
}
